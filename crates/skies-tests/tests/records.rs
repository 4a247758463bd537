//! Record decoding against fixtures built from the layout tables.

use skies_tests::{FixtureValue, FixtureWriter, RecordFixture, zero_record};
use skies_types::records::*;
use skies_types::{
  Category, DecodeError, FieldValue, Nature, OpenEnum, Record, RecordType, Timestamp, Urgency,
};
use skies_wire::Cursor;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn decode_all<R: RecordType>(bytes: &[u8]) -> R {
    let mut cursor = Cursor::new(bytes);
    let record = R::decode(&mut cursor)
        .unwrap_or_else(|e| panic!("{} failed to decode: {e}", R::SCHEMA.name));
    assert!(
        cursor.is_exhausted(),
        "{} left {} bytes",
        R::SCHEMA.name,
        cursor.remaining().len()
    );
    record
}

fn assert_blank_round_trip<R: RecordType + PartialEq>() {
    let blank = R::default();
    for (name, value) in blank.fields() {
        assert!(value.is_zero(), "{}.{name} = {value:?}", R::SCHEMA.name);
    }

    let record: R = decode_all(&zero_record(R::SCHEMA));
    assert_eq!(record, blank, "{}", R::SCHEMA.name);
}

macro_rules! assert_blank_round_trips {
    ($($ty:ident),+ $(,)?) => {
        $( assert_blank_round_trip::<$ty>(); )+
    };
}

// ── Blank records ─────────────────────────────────────────────────────────────

#[test]
fn zero_encoding_decodes_to_default_for_every_record_type() {
    assert_blank_round_trips!(
        Area,
        AspectQPossession,
        Availability,
        Bargain,
        BargainQRequirement,
        Branch,
        BranchQRequirement,
        Completion,
        CompletionQEffect,
        CompletionQRequirement,
        Deck,
        Domicile,
        Event,
        EventQEffect,
        EventQRequirement,
        Exchange,
        Persona,
        PersonaQEffect,
        PersonaQRequirement,
        Prospect,
        ProspectQEffect,
        ProspectQRequirement,
        QEnhancement,
        Quality,
        Setting,
        Shop,
        ShopQRequirement,
        User,
        UserQPossession,
        UserWorldPrivilege,
        World,
    );
}

#[test]
fn blank_placeholder_record() {
    assert!(Stub::default().field("id").unwrap().is_null());
}

// ── Populated records ─────────────────────────────────────────────────────────

#[test]
fn quality_scalars_land_in_declared_fields() {
    let bytes = RecordFixture::new(Quality::SCHEMA)
        .set("name", "Fuel")
        .set("description", "Keeps the engine turning.")
        .set("cap", 40)
        .set("persistent", true)
        .set("nature", 2)
        .set("category", 70010)
        .set("id", 125_025)
        .encode();

    let quality: Quality = decode_all(&bytes);
    assert_eq!(quality.name, "Fuel");
    assert_eq!(quality.description, "Keeps the engine turning.");
    assert_eq!(quality.cap, Some(40));
    assert!(quality.persistent);
    assert_eq!(quality.nature.known(), Some(Nature::Thing));
    assert_eq!(quality.category.known(), Some(Category::Engine));
    assert_eq!(quality.id, 125_025);
    assert_eq!(quality.qeffect_minimal_limit, None);
    assert!(quality.notes.is_empty());
}

#[test]
fn unnamed_enum_values_survive_decoding() {
    let bytes = RecordFixture::new(Quality::SCHEMA).set("nature", 3).encode();
    let quality: Quality = decode_all(&bytes);
    assert_eq!(quality.nature, OpenEnum::Unrecognized(3));
    assert_eq!(quality.nature.to_string(), "Nature(3)");
}

#[test]
fn negative_enum_value() {
    let bytes = RecordFixture::new(Event::SCHEMA).set("urgency", -1).encode();
    let event: Event = decode_all(&bytes);
    assert_eq!(event.urgency.known(), Some(Urgency::Low));
}

#[test]
fn nested_records_decode_depth_first() {
    let parent = RecordFixture::new(Quality::SCHEMA)
        .set("name", "Engines")
        .set("id", 1)
        .encode();
    let child = RecordFixture::new(Quality::SCHEMA)
        .set("name", "Piston Engine")
        .set("parent_quality", FixtureValue::Record(parent))
        .set("ordering", 4)
        .set("id", 2)
        .encode();

    let quality: Quality = decode_all(&child);
    let parent = quality.parent_quality.as_deref().unwrap();
    assert_eq!(parent.name, "Engines");
    assert_eq!(parent.id, 1);
    // Fields after the nested record are still aligned.
    assert_eq!(quality.ordering, 4);
    assert_eq!(quality.id, 2);
}

#[test]
fn event_with_branches_and_requirements() {
    let requirement = RecordFixture::new(BranchQRequirement::SCHEMA)
        .set("difficulty_level", 60)
        .set("id", 900)
        .encode();
    let branch = RecordFixture::new(Branch::SCHEMA)
        .set(
            "qualities_required",
            FixtureValue::Records(vec![Some(requirement)]),
        )
        .set("name", "Take the long way")
        .set("id", 31)
        .encode();
    let event = RecordFixture::new(Event::SCHEMA)
        .set(
            "child_branches",
            FixtureValue::Records(vec![None, Some(branch)]),
        )
        .set("ordering", 1.5f32)
        .set("uncleared_edit_at", FixtureValue::Present)
        .set("name", "A Fork in the Clouds")
        .set("id", 30)
        .encode();

    let event: Event = decode_all(&event);
    assert_eq!(event.name, "A Fork in the Clouds");
    assert!((event.ordering - 1.5).abs() < f32::EPSILON);
    assert_eq!(event.uncleared_edit_at, Some(Timestamp::PLACEHOLDER));

    let branches = event.child_branches.as_ref().unwrap();
    assert_eq!(branches.len(), 2);
    assert!(branches[0].is_none());
    let branch = branches[1].as_ref().unwrap();
    assert_eq!(branch.name, "Take the long way");
    let requirements = branch.qualities_required.as_ref().unwrap();
    assert_eq!(requirements[0].as_ref().unwrap().difficulty_level, Some(60));
}

#[test]
fn int_arrays_and_int64() {
    let exchange = RecordFixture::new(Exchange::SCHEMA)
        .set("setting_ids", vec![5, 7, 11])
        .encode();
    let exchange: Exchange = decode_all(&exchange);
    assert_eq!(exchange.setting_ids, Some(vec![5, 7, 11]));

    let user = RecordFixture::new(User::SCHEMA)
        .set("twitter_id", FixtureValue::Long(1 << 40))
        .encode();
    let user: User = decode_all(&user);
    assert_eq!(user.twitter_id, Some(1 << 40));
}

#[test]
fn absent_arrays_differ_from_blank_ones() {
    let blank = Exchange::default();
    assert_eq!(blank.shops, Some(Vec::new()));
    assert_eq!(blank.setting_ids, Some(Vec::new()));

    // Clear presence flags on both arrays.
    let mut w = FixtureWriter::new();
    w.flag(false).flag(false).flag(false).flag(false);
    w.flag(false).flag(false).i32(9);
    let exchange: Exchange = decode_all(&w.finish());
    assert_eq!(exchange.shops, None);
    assert_eq!(exchange.setting_ids, None);
    assert_eq!(exchange.id, 9);
    assert_ne!(exchange, Exchange { id: 9, ..blank });
}

// ── Reflection ────────────────────────────────────────────────────────────────

#[test]
fn decoded_fields_are_reachable_by_name() {
    let bytes = RecordFixture::new(Area::SCHEMA)
        .set("name", "The Reach")
        .set("map_x", -120)
        .encode();
    let area: Area = decode_all(&bytes);
    let record: &dyn Record = &area;

    assert_eq!(record.type_name(), "Area");
    assert_eq!(record.field("name").unwrap().as_text(), Some("The Reach"));
    assert_eq!(record.field("map_x").unwrap().as_int(), Some(-120));
    assert!(matches!(record.field("world"), Some(FieldValue::Null)));
    assert!(record.field("Name").is_none());

    let names: Vec<_> = record.fields().into_iter().map(|(name, _)| name).collect();
    let declared: Vec<_> = Area::SCHEMA.fields.iter().map(|f| f.name).collect();
    assert_eq!(names, declared);
}

// ── Failures ──────────────────────────────────────────────────────────────────

#[test]
fn populated_placeholder_reference_aborts_the_record() {
    let bytes = RecordFixture::new(Branch::SCHEMA)
        .set("act", FixtureValue::Record(Vec::new()))
        .set("name", "Unreachable")
        .encode();
    // `act` is followed by action_cost (4), name (1 + 1 + 11) and id (4).
    let stub_at = bytes.len() - (4 + 13 + 4);

    let mut cursor = Cursor::new(&bytes);
    let err = Branch::decode(&mut cursor).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::UnexpectedRecordType { record: "Stub", offset } if offset == stub_at
    ));
}

#[test]
fn truncated_record_fails() {
    let bytes = RecordFixture::new(Quality::SCHEMA).set("name", "Fuel").encode();
    for cut in [0, 1, bytes.len() / 2, bytes.len() - 1] {
        let mut cursor = Cursor::new(&bytes[..cut]);
        let err = Quality::decode(&mut cursor).unwrap_err();
        assert!(err.is_truncation(), "cut at {cut}: {err}");
    }
}
