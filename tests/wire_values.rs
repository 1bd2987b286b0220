use process_domain_modeling::{
    ArtifactUpdateType, ItemIndicatorFlags, ProcessShapeType, ProcessType, PropertyType,
    PropertyValueFormat,
};
use proptest::prelude::*;

fn shape_types() -> impl Strategy<Value = ProcessShapeType> {
    prop_oneof![
        Just(ProcessShapeType::None),
        Just(ProcessShapeType::Start),
        Just(ProcessShapeType::UserTask),
        Just(ProcessShapeType::End),
        Just(ProcessShapeType::SystemTask),
        Just(ProcessShapeType::PreconditionSystemTask),
        Just(ProcessShapeType::UserDecision),
        Just(ProcessShapeType::SystemDecision),
    ]
}

proptest! {
    #[test]
    fn shape_type_wire_value_survives_round_trip(shape_type in shape_types()) {
        let json = serde_json::to_string(&shape_type).unwrap();
        // The wire form is the literal integer
        prop_assert_eq!(&json, &i32::from(shape_type).to_string());
        let back: ProcessShapeType = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, shape_type);
    }

    #[test]
    fn out_of_range_shape_type_is_rejected(value in 8i32..1000) {
        prop_assert!(serde_json::from_str::<ProcessShapeType>(&value.to_string()).is_err());
    }

    #[test]
    fn indicator_flags_compose_additively(a in 0u32..16, b in 0u32..16) {
        let combined = ItemIndicatorFlags(a) | ItemIndicatorFlags(b);
        prop_assert!(combined.contains(ItemIndicatorFlags(a)));
        prop_assert!(combined.contains(ItemIndicatorFlags(b)));
        prop_assert_eq!(combined.0, a | b);
    }
}

#[test]
fn enum_wire_values_match_the_published_table() {
    assert_eq!(i32::from(ProcessType::None), 0);
    assert_eq!(i32::from(ProcessType::BusinessProcess), 1);
    assert_eq!(i32::from(ProcessType::UserToSystemProcess), 2);
    assert_eq!(i32::from(ProcessType::SystemToSystemProcess), 3);

    assert_eq!(i32::from(ProcessShapeType::None), 0);
    assert_eq!(i32::from(ProcessShapeType::Start), 1);
    assert_eq!(i32::from(ProcessShapeType::UserTask), 2);
    assert_eq!(i32::from(ProcessShapeType::End), 3);
    assert_eq!(i32::from(ProcessShapeType::SystemTask), 4);
    assert_eq!(i32::from(ProcessShapeType::PreconditionSystemTask), 5);
    assert_eq!(i32::from(ProcessShapeType::UserDecision), 6);
    assert_eq!(i32::from(ProcessShapeType::SystemDecision), 7);

    assert_eq!(i32::from(PropertyType::PlainText), 0);
    assert_eq!(i32::from(PropertyType::RichText), 1);
    assert_eq!(i32::from(PropertyType::Number), 2);
    assert_eq!(i32::from(PropertyType::Date), 3);
    assert_eq!(i32::from(PropertyType::Choice), 4);
    assert_eq!(i32::from(PropertyType::User), 5);

    assert_eq!(i32::from(PropertyValueFormat::Text), 0);
    assert_eq!(i32::from(PropertyValueFormat::Html), 1);
    assert_eq!(i32::from(PropertyValueFormat::Date), 2);
    assert_eq!(i32::from(PropertyValueFormat::DateTimeUtc), 3);

    assert_eq!(i32::from(ArtifactUpdateType::SubArtifact), 0);
    assert_eq!(i32::from(ArtifactUpdateType::LinkLabel), 1);
}

#[test]
fn indicator_bits_do_not_collide() {
    let bits = [
        ItemIndicatorFlags::HAS_COMMENTS,
        ItemIndicatorFlags::HAS_ATTACHMENTS_OR_DOCUMENT_REFS,
        ItemIndicatorFlags::HAS_MANUAL_REUSE_OR_OTHER_TRACES,
        ItemIndicatorFlags::HAS_LAST_24_HOURS_CHANGES,
    ];
    assert_eq!(bits.map(|b| b.0), [1, 2, 4, 8]);
    for (i, a) in bits.iter().enumerate() {
        for b in &bits[i + 1..] {
            assert!((*a & *b).is_empty());
        }
    }
}
