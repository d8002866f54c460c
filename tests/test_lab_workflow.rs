use russell_chk::assert_approx_eq;
use soillab::{
    classify_aashto, classify_uscs, liquid_limit, plastic_limit, MoistureClass, MoistureResult, PlasticityClass,
    PlasticityIndex, SampleData, StrError,
};

// Runs the full laboratory workflow for a clayey sample: moisture content,
// Atterberg limits, and classification under both systems.
#[test]
fn test_clayey_sample_workflow() -> Result<(), StrError> {
    // moisture content from the oven weighings
    let moisture = MoistureResult::new(&SampleData::moisture_test())?;
    assert_approx_eq!(moisture.moisture_content, 20.0, 1e-13);
    assert_eq!(moisture.class, MoistureClass::Moist);

    // Atterberg limits: LL from the flow curve, LP from three determinations
    let ll = liquid_limit(&SampleData::flow_curve())?;
    assert_approx_eq!(ll, 42.0, 1e-13);
    let lp = plastic_limit(&[20.5, 21.0, 21.5])?;
    assert_approx_eq!(lp, 21.0, 1e-13);
    let ip = PlasticityIndex::new(ll, lp);
    assert_approx_eq!(ip.index, 21.0, 1e-13);
    assert_eq!(ip.class, PlasticityClass::High);

    // USCS: 60 % fines with LL = 42 and IP = 21 sits above the A-line
    let uscs = classify_uscs(15.0, 25.0, 60.0, Some(ll), Some(ip.index))?;
    assert_eq!(uscs.symbol, "CL");
    assert_eq!(uscs.category, "Fine soil");

    // AASHTO: clayey soil with LL > 40 and IP above the A-7-5 split
    let aashto = classify_aashto(60.0, ll, ip.index);
    assert_eq!(aashto.group, "A-7-6");
    // GI = 0.2·25 + 0.005·25·2 + 0.01·45·11 = 10.2 -> 10
    assert_eq!(aashto.group_index, 10);
    assert_eq!(aashto.label(), "A-7-6 (10)");
    assert_eq!(aashto.rating, "Poor");
    Ok(())
}

// A clean granular sample skips the plasticity chart entirely
#[test]
fn test_granular_sample_workflow() -> Result<(), StrError> {
    let ip = PlasticityIndex::new(18.0, 20.0);
    assert_eq!(ip.class, PlasticityClass::NonPlastic);

    let uscs = classify_uscs(62.0, 35.0, 3.0, None, None)?;
    assert_eq!(uscs.symbol, "GW/GP");

    let aashto = classify_aashto(8.0, 18.0, ip.index);
    assert_eq!(aashto.group, "A-1-a");
    assert_eq!(aashto.group_index, 0);
    assert_eq!(aashto.rating, "Excellent to Good");
    assert_eq!(aashto.suggested_use, "Excellent for subgrade and base");
    Ok(())
}
