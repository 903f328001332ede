use chrono::NaiveDate;
use plume_schema::prelude::*;
use std::sync::Arc;

fn section(schema: SectionSchema, overrides: plume_schema::OverrideTableBuilder) -> Section {
    let overrides = overrides.build(&schema).unwrap();
    Section::new(Arc::new(schema), Arc::new(overrides))
}

#[test]
fn date_is_split_into_unpadded_parts() {
    let schema = SectionSchema::builder("TIME_UTC", "time")
        .field(FieldSpec::date("f1", "DATE", NaiveDate::from_ymd_opt(2021, 9, 3)))
        .field(FieldSpec::float("f2", "RUN_START_(HOURS_AFTER_00)", 0.0))
        .build()
        .unwrap();
    let time = section(schema, OverrideTable::builder().rule(GroupKey::new("DATE"), rules::date_parts()));

    assert_eq!(time.render(), "   YEAR = 2021\n   MONTH = 9\n   DAY = 3\n   RUN_START_(HOURS_AFTER_00) = 0.0");
}

#[test]
fn cleared_date_falls_back_to_the_default_line() {
    let schema = SectionSchema::builder("TIME_UTC", "time")
        .field(FieldSpec::date("f1", "DATE", None))
        .build()
        .unwrap();
    let time = section(schema, OverrideTable::builder().rule(GroupKey::new("DATE"), rules::date_parts()));

    assert_eq!(time.render(), "   DATE = no data");
}

#[test]
fn resolution_toggle_picks_count_or_spacing() {
    let schema = SectionSchema::builder("GRID", "grid")
        .field(FieldSpec::integer("f7", "NX", 50))
        .field(FieldSpec::boolean("f8", "NX", false).label("RESOLUTION"))
        .field(FieldSpec::float("f9", "NX", 0.1))
        .build()
        .unwrap();
    let mut grid =
        section(schema, OverrideTable::builder().rule(GroupKey::new("NX"), rules::resolution_toggle()));

    assert_eq!(grid.render(), "   NX = 50");
    grid.set("f8", true).unwrap();
    assert_eq!(grid.render(), "   NX = RESOLUTION 0.1");
}

#[test]
fn choice_rules_respect_their_sentinels() {
    let schema = SectionSchema::builder("MIXED", "choices")
        .field(FieldSpec::choice("f1", "CUT", "NONE", ["NONE", "FI_LOWER_THAN"]))
        .field(FieldSpec::float("f2", "CUT", 1.0))
        .field(FieldSpec::choice("f3", "RATE", "value", ["value", "ESTIMATE"]))
        .field(FieldSpec::float("f4", "RATE", 5.0))
        .field(FieldSpec::choice("f5", "MODEL", "CONSTANT", ["CONSTANT", "SMAGORINSKY"]))
        .field(FieldSpec::float("f6", "MODEL", 1000.0))
        .build()
        .unwrap();
    let overrides = OverrideTable::builder()
        .rule(GroupKey::new("CUT"), rules::choice_short_circuit("NONE"))
        .rule(GroupKey::new("RATE"), rules::choice_or_value("value"))
        .rule(GroupKey::new("MODEL"), rules::choice_unless("CONSTANT"));
    let mut mixed = section(schema, overrides);

    assert_eq!(mixed.render(), "   CUT = NONE\n   RATE = 5.0\n   MODEL = CONSTANT 1000.0");

    mixed.update_from([("f1", "FI_LOWER_THAN"), ("f3", "ESTIMATE"), ("f5", "SMAGORINSKY")]).unwrap();
    assert_eq!(mixed.render(), "   CUT = FI_LOWER_THAN 1.0\n   RATE = ESTIMATE\n   MODEL = SMAGORINSKY");
}

#[test]
fn yes_no_applies_to_boolean_backed_variables_only() {
    let schema = SectionSchema::builder("MODEL_OUTPUT", "output")
        .field(FieldSpec::boolean("f1", "PARALLEL_IO", false))
        .field(FieldSpec::boolean("f2", "LOG_FILE_LEVEL", true).without_default())
        .field(FieldSpec::string("f3", "TRACK_POINTS_FILE", "points.dat"))
        .build()
        .unwrap();
    let output = section(schema, OverrideTable::builder().each_kind(FieldKind::Boolean, rules::yes_no()));

    assert_eq!(
        output.render(),
        "   PARALLEL_IO = NO\n   LOG_FILE_LEVEL = NO\n   TRACK_POINTS_FILE = points.dat"
    );
}
