//! Field declarations of the FALL3D input file, one builder per section.
//!
//! Keys (`f1`, `f2`, ...) are the stable identifiers used by the form layer; gaps in
//! the numbering are kept so stored profiles stay addressable.

use chrono::NaiveDate;
use plume_schema::{FieldSpec, GroupKey, OverrideTable, OverrideTableBuilder, SchemaError, SectionSchema};
use plume_schema::{FieldKind, rules};

const MASS_FRACTION: &str = "MASS_FRACTION_(%)";

pub(crate) fn time_utc() -> Result<SectionSchema, SchemaError> {
    SectionSchema::builder(
        "TIME_UTC",
        "This block defines variables related to date and time. It is used by FALL3D, SetDbs, and SetSrc tasks",
    )
    .field(FieldSpec::date("f1", "DATE", NaiveDate::from_ymd_opt(2008, 4, 29)))
    .field(FieldSpec::float("f2", "RUN_START_(HOURS_AFTER_00)", 0.0))
    .field(FieldSpec::float("f3", "RUN_END_(HOURS_AFTER_00)", 24.0))
    .field(FieldSpec::choice("f4", "INITIAL_CONDITION", "NONE", ["NONE", "INSERTION", "RESTART"]))
    .field(FieldSpec::string("f5", "RESTART_FILE", "Example-8.0.rst.nc"))
    .field(FieldSpec::string("f6", "RESTART_ENSEMBLE_BASEPATH", "./"))
    .build()
}

pub(crate) fn time_utc_overrides() -> OverrideTableBuilder {
    OverrideTable::builder().rule(GroupKey::new("DATE"), rules::date_parts())
}

pub(crate) fn meteo_data() -> Result<SectionSchema, SchemaError> {
    SectionSchema::builder(
        "METEO_DATA",
        "This block defines variables related to the input meteorological dataset. It is read by the SetDbs task",
    )
    .field(FieldSpec::choice(
        "f1",
        "METEO_DATA_FORMAT",
        "WRF",
        ["WRF", "GFS", "ERA5", "ERA5ML", "IFS", "CARRA"],
    ))
    .field(FieldSpec::string("f2", "METEO_DATA_DICTIONARY_FILE", "WRF.tbl"))
    .field(FieldSpec::string("f3", "METEO_DATA_FILE", "Example-8.0.wrf.nc"))
    .field(FieldSpec::string("f4", "METEO_ENSEMBLE_BASEPATH", ""))
    .field(FieldSpec::string("f5", "METEO_LEVELS_FILE", "../Other/Meteo/Tables/L137_ECMWF.levels"))
    .field(FieldSpec::float("f6", "DBS_BEGIN_METEO_DATA_(HOURS_AFTER_00)", 0.0))
    .field(FieldSpec::float("f7", "DBS_END_METEO_DATA_(HOURS_AFTER_00)", 24.0))
    .field(FieldSpec::float("f8", "METEO_COUPLING_INTERVAL_(MIN)", 60.0))
    .field(FieldSpec::integer("f9", "MEMORY_CHUNK_SIZE", 5))
    .build()
}

pub(crate) fn grid() -> Result<SectionSchema, SchemaError> {
    SectionSchema::builder("GRID", "This block defines the grid variables needed by the SetDbs and FALL3D tasks")
        .field(FieldSpec::choice("f1", "HORIZONTAL_MAPPING", "SPHERICAL", ["CARTESIAN", "SPHERICAL"]))
        .field(FieldSpec::choice(
            "f2",
            "VERTICAL_MAPPING",
            "SIGMA_LINEAR_DECAY",
            ["SIGMA_NO_DECAY", "SIGMA_LINEAR_DECAY", "SIGMA_EXPONENTIAL_DECAY"],
        ))
        .field(FieldSpec::float("f3", "LONMIN", 14.0))
        .field(FieldSpec::float("f4", "LONMAX", 16.0))
        .field(FieldSpec::float("f5", "LATMIN", 36.5))
        .field(FieldSpec::float("f6", "LATMAX", 38.5))
        .field(FieldSpec::integer("f7", "NX", 50))
        .field(FieldSpec::boolean("f8", "NX", false).label("RESOLUTION"))
        .field(FieldSpec::float("f9", "NX", 0.1))
        .field(FieldSpec::integer("f10", "NY", 50))
        .field(FieldSpec::boolean("f11", "NY", false).label("RESOLUTION"))
        .field(FieldSpec::float("f12", "NY", 0.1))
        .field(FieldSpec::integer("f13", "NZ", 10))
        .field(FieldSpec::float("f14", "ZMAX_(M)", 10000.0))
        .field(FieldSpec::string("f15", "SIGMA_VALUES", ""))
        .build()
}

pub(crate) fn grid_overrides() -> OverrideTableBuilder {
    OverrideTable::builder()
        .rule(GroupKey::new("NX"), rules::resolution_toggle())
        .rule(GroupKey::new("NY"), rules::resolution_toggle())
}

pub(crate) fn species() -> Result<SectionSchema, SchemaError> {
    SectionSchema::builder(
        "SPECIES",
        "This block is used by FALL3D, SetTgsd, and SetSrc tasks and defines which species are modeled",
    )
    .field(FieldSpec::boolean("f1", "TEPHRA", true))
    .field(FieldSpec::boolean("f2", "DUST", false))
    .fields(tracer("f3", "f4", "H2O", false, 2.0))
    .fields(tracer("f5", "f6", "SO2", true, 1.0))
    .fields(tracer("f7", "f8", "CS134", false, 0.0))
    .fields(tracer("f9", "f10", "CS137", false, 0.0))
    .fields(tracer("f11", "f12", "I131", false, 0.0))
    .fields(tracer("f13", "f14", "SR90", false, 0.0))
    .fields(tracer("f15", "f16", "Y90", false, 0.0))
    .build()
}

/// Species switch followed by its labelled mass fraction.
fn tracer(
    switch: &'static str,
    fraction: &'static str,
    variable: &'static str,
    enabled: bool,
    percent: f64,
) -> [FieldSpec; 2] {
    [
        FieldSpec::boolean(switch, variable, enabled),
        FieldSpec::float(fraction, variable, percent).label(MASS_FRACTION),
    ]
}

pub(crate) fn tephra_tgsd() -> Result<SectionSchema, SchemaError> {
    SectionSchema::builder(
        "TEPHRA_TGSD",
        "These blocks define the TGSD for each species and are used by the SetTgsd task to generate some basic distributions",
    )
    .field(FieldSpec::integer("f1", "NUMBER_OF_BINS", 6))
    .field(FieldSpec::string("f2", "FI_RANGE", "-2 8"))
    .field(FieldSpec::string("f3", "DENSITY_RANGE", "1200 2300"))
    .field(FieldSpec::string("f4", "SPHERICITY_RANGE", "0.9 0.9"))
    .field(FieldSpec::choice(
        "f5",
        "DISTRIBUTION",
        "GAUSSIAN",
        ["GAUSSIAN", "BIGAUSSIAN", "WEIBULL", "BIWEIBULL", "CUSTOM", "ESTIMATE"],
    ))
    .field(FieldSpec::float("f6", "FI_MEAN", 2.5).block("IF_GAUSSIAN"))
    .field(FieldSpec::float("f7", "FI_DISP", 1.5).block("IF_GAUSSIAN"))
    .field(FieldSpec::string("f8", "FI_MEAN", "0.25 0.75").block("IF_BIGAUSSIAN"))
    .field(FieldSpec::string("f9", "FI_DISP", "1.44 1.46").block("IF_BIGAUSSIAN"))
    .field(FieldSpec::float("f10", "MIXING_FACTOR", 0.5).block("IF_BIGAUSSIAN"))
    .build()
}

pub(crate) fn particle_aggregation() -> Result<SectionSchema, SchemaError> {
    SectionSchema::builder(
        "PARTICLE_AGGREGATION",
        "This block is used by task SetSrc and controls particle aggregation and cut-off (for categories particles and radionuclides only)",
    )
    .field(FieldSpec::choice(
        "f1",
        "PARTICLE_CUT_OFF",
        "NONE",
        ["NONE", "FI_LOWER_THAN", "FI_LARGER_THAN", "D_(MIC)_LARGER_THAN", "D_(MIC)_LOWER_THAN"],
    ))
    .field(FieldSpec::float("f2", "PARTICLE_CUT_OFF", 1.0))
    .field(FieldSpec::choice(
        "f3",
        "AGGREGATION_MODEL",
        "PERCENTAGE",
        ["NONE", "CORNELL", "COSTA", "PERCENTAGE"],
    ))
    .field(FieldSpec::integer("f4", "NUMBER_OF_AGGREGATE_BINS", 2))
    .field(FieldSpec::string("f5", "DIAMETER_AGGREGATES_(MIC)", "300. 200."))
    .field(FieldSpec::string("f6", "DENSITY_AGGREGATES_(KGM3)", "350. 250."))
    .field(FieldSpec::string("f7", "PERCENTAGE_(%)", "20. 10."))
    .field(FieldSpec::float("f8", "VSET_FACTOR", 0.5))
    .field(FieldSpec::float("f9", "FRACTAL_EXPONENT", 2.99))
    .build()
}

pub(crate) fn particle_aggregation_overrides() -> OverrideTableBuilder {
    OverrideTable::builder()
        .rule(GroupKey::new("PARTICLE_CUT_OFF"), rules::choice_short_circuit("NONE"))
}

pub(crate) fn source() -> Result<SectionSchema, SchemaError> {
    SectionSchema::builder(
        "SOURCE",
        "This block defines the variables needed by the SetSrc task to generate the source term for the emission phases",
    )
    .field(FieldSpec::choice("f1", "SOURCE_TYPE", "TOP-HAT", ["POINT", "SUZUKI", "TOP-HAT", "PLUME"]))
    .field(FieldSpec::string("f2", "SOURCE_START_(HOURS_AFTER_00)", "0  12"))
    .field(FieldSpec::string("f3", "SOURCE_END_(HOURS_AFTER_00)", "10 24"))
    .field(FieldSpec::float("f4", "LON_VENT", 15.0))
    .field(FieldSpec::float("f5", "LAT_VENT", 37.75))
    .field(FieldSpec::float("f6", "VENT_HEIGHT_(M)", 3000.0))
    .field(FieldSpec::float("f7", "HEIGHT_ABOVE_VENT_(M)", 6000.0))
    .field(FieldSpec::choice(
        "f8",
        "MASS_FLOW_RATE_(KGS)",
        "ESTIMATE-MASTIN",
        ["value", "ESTIMATE-MASTIN", "ESTIMATE-WOODHOUSE", "ESTIMATE-DEGRUYTER"],
    ))
    .field(FieldSpec::float("f9", "MASS_FLOW_RATE_(KGS)", 1.0e7))
    .field(FieldSpec::float("f10", "ALFA_PLUME", 0.1))
    .field(FieldSpec::float("f11", "BETA_PLUME", 0.5))
    .field(FieldSpec::float("f12", "EXIT_TEMPERATURE_(K)", 1200.0))
    .field(FieldSpec::float("f13", "EXIT_WATER_FRACTION_(%)", 0.0))
    .field(FieldSpec::string("f14", "A", "4. 5.").block("IF_SUZUKI_SOURCE"))
    .field(FieldSpec::string("f15", "L", "5.").block("IF_SUZUKI_SOURCE"))
    .field(FieldSpec::float("f16", "THICKNESS_(M)", 2000.0).block("IF_TOP-HAT_SOURCE"))
    .build()
}

pub(crate) fn source_overrides() -> OverrideTableBuilder {
    OverrideTable::builder()
        .rule(GroupKey::new("MASS_FLOW_RATE_(KGS)"), rules::choice_or_value("value"))
}

pub(crate) fn model_physics() -> Result<SectionSchema, SchemaError> {
    SectionSchema::builder(
        "MODEL_PHYSICS",
        "This block defines the specific variables related to physics in the FALL3D model",
    )
    .field(FieldSpec::choice("f1", "LIMITER", "SUPERBEE", ["MINMOD", "SUPERBEE", "OSPRE"]))
    .field(FieldSpec::choice("f2", "TIME_MARCHING", "RUNGE-KUTTA", ["EULER", "RUNGE-KUTTA"]))
    .field(FieldSpec::choice(
        "f3",
        "CFL_CRITERION",
        "ALL_DIMENSIONS",
        ["ONE_DIMENSIONAL", "ALL_DIMENSIONS"],
    ))
    .field(FieldSpec::float("f4", "CFL_SAFETY_FACTOR", 0.9))
    .field(FieldSpec::choice(
        "f5",
        "TERMINAL_VELOCITY_MODEL",
        "GANSER",
        ["ARASTOOPOUR", "GANSER", "WILSON", "DELLINO", "PFEIFFER", "DIOGUARDI2017", "DIOGUARDI2018"],
    ))
    .field(FieldSpec::choice("f6", "HORIZONTAL_TURBULENCE_MODEL", "CMAQ", ["CONSTANT", "CMAQ", "RAMS"]))
    .field(FieldSpec::float("f7", "HORIZONTAL_TURBULENCE_MODEL", 1000.0))
    .field(FieldSpec::choice("f8", "VERTICAL_TURBULENCE_MODEL", "SIMILARITY", ["CONSTANT", "SIMILARITY"]))
    .field(FieldSpec::float("f9", "VERTICAL_TURBULENCE_MODEL", 150.0))
    .field(FieldSpec::float("f10", "RAMS_CS", 0.2275))
    .field(FieldSpec::boolean("f11", "WET_DEPOSITION", false))
    .field(FieldSpec::boolean("f12", "DRY_DEPOSITION", false))
    .field(FieldSpec::boolean("f13", "GRAVITY_CURRENT", false))
    .field(FieldSpec::float("f15", "C_FLOW_RATE", 870.0).block("IF_GRAVITY_CURRENT"))
    .field(FieldSpec::float("f16", "LAMBDA_GRAV", 0.2).block("IF_GRAVITY_CURRENT"))
    .field(FieldSpec::float("f17", "K_ENTRAIN", 0.1).block("IF_GRAVITY_CURRENT"))
    .field(FieldSpec::float("f18", "BRUNT_VAISALA", 0.02).block("IF_GRAVITY_CURRENT"))
    .field(FieldSpec::float("f19", "GC_START_(HOURS_AFTER_00)", 0.0).block("IF_GRAVITY_CURRENT"))
    .field(FieldSpec::float("f20", "GC_END_(HOURS_AFTER_00)", 3.0).block("IF_GRAVITY_CURRENT"))
    .build()
}

pub(crate) fn model_physics_overrides() -> OverrideTableBuilder {
    OverrideTable::builder()
        .each_kind(FieldKind::Boolean, rules::yes_no())
        .rule(GroupKey::new("HORIZONTAL_TURBULENCE_MODEL"), rules::choice_unless("CONSTANT"))
        .rule(GroupKey::new("VERTICAL_TURBULENCE_MODEL"), rules::choice_unless("CONSTANT"))
}

pub(crate) fn model_output() -> Result<SectionSchema, SchemaError> {
    SectionSchema::builder(
        "MODEL_OUTPUT",
        "This block is read by task FALL3D and defines specific variables related to output strategy",
    )
    .field(FieldSpec::boolean("f1", "PARALLEL_IO", false))
    .field(FieldSpec::choice("f2", "LOG_FILE_LEVEL", "FULL", ["NONE", "NORMAL", "FULL"]))
    .field(FieldSpec::choice(
        "f3",
        "RESTART_TIME_INTERVAL_(HOURS)",
        "END_ONLY",
        ["value", "NONE", "END_ONLY"],
    ))
    .field(FieldSpec::float("f4", "RESTART_TIME_INTERVAL_(HOURS)", 12.0))
    .field(FieldSpec::boolean("f5", "OUTPUT_JSON_FILES", false))
    .field(FieldSpec::boolean("f6", "OUTPUT_INTERMEDIATE_FILES", false))
    .field(FieldSpec::choice("f7", "OUTPUT_TIME_START_(HOURS)", "RUN_START", ["value", "RUN_START"]))
    .field(FieldSpec::float("f8", "OUTPUT_TIME_START_(HOURS)", 0.0))
    .field(FieldSpec::float("f9", "OUTPUT_TIME_INTERVAL_(HOURS)", 1.0))
    .field(FieldSpec::boolean("f10", "OUTPUT_3D_CONCENTRATION", false))
    .field(FieldSpec::boolean("f11", "OUTPUT_3D_CONCENTRATION_BINS", false))
    .field(FieldSpec::boolean("f12", "OUTPUT_SURFACE_CONCENTRATION", false))
    .field(FieldSpec::boolean("f13", "OUTPUT_COLUMN_LOAD", true))
    .field(FieldSpec::boolean("f14", "OUTPUT_CLOUD_TOP", true))
    .field(FieldSpec::boolean("f15", "OUTPUT_GROUND_LOAD", true))
    .field(FieldSpec::boolean("f16", "OUTPUT_GROUND_LOAD_BINS", false))
    .field(FieldSpec::boolean("f17", "OUTPUT_WET_DEPOSITION", false))
    .field(FieldSpec::boolean("f18", "TRACK_POINTS", false))
    .field(FieldSpec::string("f19", "TRACK_POINTS_FILE", "my_file.pts"))
    .field(FieldSpec::boolean("f20", "OUTPUT_CONCENTRATION_AT_XCUTS", false))
    .field(FieldSpec::string("f21", "X-VALUES", "15"))
    .field(FieldSpec::boolean("f22", "OUTPUT_CONCENTRATION_AT_YCUTS", false))
    .field(FieldSpec::string("f23", "Y-VALUES", "37.5"))
    .field(FieldSpec::boolean("f24", "OUTPUT_CONCENTRATION_AT_ZCUTS", false))
    .field(FieldSpec::string("f25", "Z-VALUES", "5000"))
    .field(FieldSpec::boolean("f26", "OUTPUT_CONCENTRATION_AT_FL", true))
    .field(FieldSpec::string("f27", "FL-VALUES", "50 100 150 200 250 300 350 400"))
    .build()
}

pub(crate) fn model_output_overrides() -> OverrideTableBuilder {
    OverrideTable::builder()
        .each_kind(FieldKind::Boolean, rules::yes_no())
        .rule(GroupKey::new("RESTART_TIME_INTERVAL_(HOURS)"), rules::choice_or_value("value"))
        .rule(GroupKey::new("OUTPUT_TIME_START_(HOURS)"), rules::choice_or_value("value"))
}
