use plume_fall3d::{Fall3dSection, fall3d_catalog};
use plume_schema::{ConfigurationDocument, SchemaError};

fn document() -> ConfigurationDocument {
    ConfigurationDocument::create(&fall3d_catalog().unwrap())
}

fn lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}

#[test]
fn time_date_is_split_into_year_month_day() {
    let text = document().render_section("TIME_UTC").unwrap();
    assert_eq!(
        lines(&text),
        [
            "   YEAR = 2008",
            "   MONTH = 4",
            "   DAY = 29",
            "   RUN_START_(HOURS_AFTER_00) = 0.0",
            "   RUN_END_(HOURS_AFTER_00) = 24.0",
            "   INITIAL_CONDITION = NONE",
            "   RESTART_FILE = Example-8.0.rst.nc",
            "   RESTART_ENSEMBLE_BASEPATH = ./",
        ]
    );
    assert!(!text.contains("DATE ="));
}

#[test]
fn grid_resolution_toggle() -> Result<(), SchemaError> {
    let mut document = document();
    let text = document.render_section("GRID")?;
    assert!(lines(&text).contains(&"   NX = 50"));
    assert!(lines(&text).contains(&"   NY = 50"));

    let grid = document.section_mut("GRID")?;
    grid.set("f8", true)?;
    grid.set_from_str("f10", "75")?;
    let text = document.render_section("GRID")?;
    assert!(lines(&text).contains(&"   NX = RESOLUTION 0.1"));
    assert!(lines(&text).contains(&"   NY = 75"));
    Ok(())
}

#[test]
fn grid_renders_every_variable_once() {
    let text = document().render_section("GRID").unwrap();
    assert_eq!(
        lines(&text),
        [
            "   HORIZONTAL_MAPPING = SPHERICAL",
            "   VERTICAL_MAPPING = SIGMA_LINEAR_DECAY",
            "   LONMIN = 14.0",
            "   LONMAX = 16.0",
            "   LATMIN = 36.5",
            "   LATMAX = 38.5",
            "   NX = 50",
            "   NY = 50",
            "   NZ = 10",
            "   ZMAX_(M) = 10000.0",
            "   SIGMA_VALUES = ",
        ]
    );
}

#[test]
fn aggregation_cut_off_none_suppresses_the_companion() -> Result<(), SchemaError> {
    let mut document = document();
    let text = document.render_section("PARTICLE_AGGREGATION")?;
    assert_eq!(text.lines().next(), Some("   PARTICLE_CUT_OFF = NONE"));

    document.section_mut("PARTICLE_AGGREGATION")?.set("f1", "FI_LOWER_THAN")?;
    let text = document.render_section("PARTICLE_AGGREGATION")?;
    assert_eq!(text.lines().next(), Some("   PARTICLE_CUT_OFF = FI_LOWER_THAN 1.0"));
    Ok(())
}

#[test]
fn source_mass_flow_rate_value_or_estimate() -> Result<(), SchemaError> {
    let mut document = document();
    let text = document.render_section("SOURCE")?;
    assert!(lines(&text).contains(&"   MASS_FLOW_RATE_(KGS) = ESTIMATE-MASTIN"));

    document.section_mut("SOURCE")?.set("f8", "value")?;
    let text = document.render_section("SOURCE")?;
    assert!(lines(&text).contains(&"   MASS_FLOW_RATE_(KGS) = 10000000.0"));
    assert_eq!(text.matches("MASS_FLOW_RATE_(KGS)").count(), 1);
    Ok(())
}

#[test]
fn source_blocks_follow_the_top_level_lines() {
    let text = document().render_section("SOURCE").unwrap();
    let tail: Vec<&str> = lines(&text).into_iter().rev().take(7).rev().collect();
    assert_eq!(
        tail,
        [
            "",
            "   IF_SUZUKI_SOURCE",
            "      A = 4. 5.",
            "      L = 5.",
            "",
            "   IF_TOP-HAT_SOURCE",
            "      THICKNESS_(M) = 2000.0",
        ]
    );
}

#[test]
fn physics_says_yes_where_output_says_no() -> Result<(), SchemaError> {
    let mut document = document();
    document.section_mut("MODEL_PHYSICS")?.set("f11", true)?;

    let physics = document.render_section("MODEL_PHYSICS")?;
    let output = document.render_section("MODEL_OUTPUT")?;
    let species = document.render_section("SPECIES")?;

    assert!(lines(&physics).contains(&"   WET_DEPOSITION = YES"));
    assert!(lines(&physics).contains(&"   DRY_DEPOSITION = NO"));
    assert!(lines(&output).contains(&"   PARALLEL_IO = NO"));
    assert!(lines(&output).contains(&"   OUTPUT_COLUMN_LOAD = YES"));
    assert!(lines(&species).contains(&"   TEPHRA = ON"));
    assert!(lines(&species).contains(&"   H2O = OFF MASS_FRACTION_(%) 2.0"));
    Ok(())
}

#[test]
fn physics_turbulence_models_drop_the_constant_unless_selected() -> Result<(), SchemaError> {
    let mut document = document();
    let physics = document.render_section("MODEL_PHYSICS")?;
    assert!(lines(&physics).contains(&"   HORIZONTAL_TURBULENCE_MODEL = CMAQ"));
    assert!(lines(&physics).contains(&"   VERTICAL_TURBULENCE_MODEL = SIMILARITY"));

    document.section_mut("MODEL_PHYSICS")?.set("f6", "CONSTANT")?;
    let physics = document.render_section("MODEL_PHYSICS")?;
    assert!(lines(&physics).contains(&"   HORIZONTAL_TURBULENCE_MODEL = CONSTANT 1000.0"));
    assert!(physics.ends_with("   IF_GRAVITY_CURRENT\n      C_FLOW_RATE = 870.0\n      LAMBDA_GRAV = 0.2\n      K_ENTRAIN = 0.1\n      BRUNT_VAISALA = 0.02\n      GC_START_(HOURS_AFTER_00) = 0.0\n      GC_END_(HOURS_AFTER_00) = 3.0"));
    Ok(())
}

#[test]
fn output_intervals_choose_between_keyword_and_value() -> Result<(), SchemaError> {
    let mut document = document();
    let output = document.render_section("MODEL_OUTPUT")?;
    assert!(lines(&output).contains(&"   RESTART_TIME_INTERVAL_(HOURS) = END_ONLY"));
    assert!(lines(&output).contains(&"   OUTPUT_TIME_START_(HOURS) = RUN_START"));

    document
        .section_mut("MODEL_OUTPUT")?
        .update_from([("f3", "value"), ("f4", "6"), ("f7", "value"), ("f8", "1.5")])?;
    let output = document.render_section("MODEL_OUTPUT")?;
    assert!(lines(&output).contains(&"   RESTART_TIME_INTERVAL_(HOURS) = 6.0"));
    assert!(lines(&output).contains(&"   OUTPUT_TIME_START_(HOURS) = 1.5"));
    Ok(())
}

#[test]
fn tgsd_blocks_render_under_headers() {
    let text = document().render_section("TEPHRA_TGSD").unwrap();
    assert_eq!(
        text,
        [
            "   NUMBER_OF_BINS = 6",
            "   FI_RANGE = -2 8",
            "   DENSITY_RANGE = 1200 2300",
            "   SPHERICITY_RANGE = 0.9 0.9",
            "   DISTRIBUTION = GAUSSIAN",
            "",
            "   IF_GAUSSIAN",
            "      FI_MEAN = 2.5",
            "      FI_DISP = 1.5",
            "",
            "   IF_BIGAUSSIAN",
            "      FI_MEAN = 0.25 0.75",
            "      FI_DISP = 1.44 1.46",
            "      MIXING_FACTOR = 0.5",
        ]
        .join("\n")
    );
}

#[test]
fn document_joins_sections_in_catalog_order() {
    let document = document();
    let expected: Vec<String> = document.sections().iter().map(|s| s.render()).collect();
    assert_eq!(document.render(), expected.join("\n\n"));
    assert!(document.render().starts_with("   YEAR = 2008\n"));
    assert_eq!(document.tags().collect::<Vec<_>>().last(), Some(&Fall3dSection::ModelOutput.tag()));
}

#[test]
fn rendering_never_mutates_the_document() {
    let document = document();
    let before = document.clone();
    let _ = document.render();
    assert_eq!(document.render(), before.render());
}
