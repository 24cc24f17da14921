use super::*;

fn ops(steps: &[(bool, u32)]) -> Vec<Operation> {
    steps
        .iter()
        .map(|&(is_xor, rotation_amount)| Operation {
            is_xor,
            rotation_amount,
        })
        .collect()
}

#[test]
fn zero_definition_is_all_add_zero() {
    let decoded = decode("8x2", 0).unwrap();
    assert_eq!(decoded, vec![Operation::add(0); 4]);
}

#[test]
fn decode_8x2_reads_fields_in_reverse() {
    // flags 1010, rotations 1,2,3,4 packed most-significant first
    let definition = 0b1010_001_010_011_100;
    assert_eq!(definition, 41628);
    let decoded = decode("8x2", definition).unwrap();
    assert_eq!(decoded, ops(&[(true, 1), (false, 2), (true, 3), (false, 4)]));
}

#[test]
fn decode_32x3_known_definition() {
    let decoded = decode("32x3", 27_883_975_269).unwrap();
    assert_eq!(
        decoded,
        ops(&[
            (false, 31),
            (true, 0),
            (true, 7),
            (false, 12),
            (false, 19),
            (true, 5)
        ])
    );
}

#[test]
fn decode_64x4_ignores_bits_above_56() {
    let clean = 0x00cb_fc10_8310_51be_u64;
    let expected = ops(&[
        (true, 63),
        (true, 1),
        (false, 2),
        (false, 3),
        (true, 4),
        (false, 5),
        (true, 6),
        (true, 62),
    ]);
    assert_eq!(decode("64x4", clean).unwrap(), expected);
    assert_eq!(decode("64x4", clean | 0xFF00_0000_0000_0000).unwrap(), expected);
    assert_eq!(decode("64x4", clean | (1 << 56)).unwrap(), expected);
}

#[test]
fn decode_counts_and_ranges_hold_for_every_type() {
    for t in MixType::ALL {
        for definition in [0, u64::MAX, 0x5555_5555_5555_5555, 0xA5A5_0F0F_3C3C_9696] {
            let decoded = decode_with(t, definition);
            assert_eq!(decoded.len(), t.operator_count());
            assert!(
                decoded
                    .iter()
                    .all(|op| op.rotation_amount < (1 << t.rotation_bits()))
            );
        }
    }
}

#[test]
fn all_ones_decodes_to_xor_max_rotation() {
    for t in MixType::ALL {
        let max = (1u32 << t.rotation_bits()) - 1;
        assert!(
            decode_with(t, u64::MAX)
                .iter()
                .all(|op| *op == Operation::xor(max))
        );
    }
}

#[test]
fn unknown_type_fails_before_decoding() {
    let err = decode("16x5", 12345).unwrap_err();
    assert!(matches!(err, ArxError::UnknownType(ref id) if id == "16x5"));
    assert!(MixDescriptor::decode("nope", 0).is_err());
}

#[test]
fn encode_inverts_decode_and_zeroes_high_bits() {
    let t = MixType::Mix64x4;
    let definition = 0x00cb_fc10_8310_51be;
    let decoded = decode_with(t, definition | (0xAB << 56));
    assert_eq!(encode(t, &decoded).unwrap(), definition);
}

#[test]
fn encode_rejects_wrong_length() {
    let err = encode(MixType::Mix8x3, &[Operation::add(1); 4]).unwrap_err();
    assert!(matches!(err, ArxError::Validation(_)));
    assert!(err.to_string().contains("needs 6 operations, got 4"));
}

#[test]
fn encode_rejects_oversized_rotation() {
    let mut list = vec![Operation::add(0); 4];
    list[2] = Operation::xor(8);
    let err = encode(MixType::Mix8x2, &list).unwrap_err();
    assert!(err.to_string().contains("operation 2: rotation 8"));

    list[2] = Operation::xor(7);
    assert!(encode(MixType::Mix8x2, &list).is_ok());
}

#[test]
fn descriptor_roundtrips_through_pack() {
    let desc = MixDescriptor::decode("8x2", 41628).unwrap();
    assert_eq!(desc.mix_type(), MixType::Mix8x2);
    assert_eq!(desc.operations().len(), 4);
    assert_eq!(desc.pack(), 41628);

    let built = MixDescriptor::new(MixType::Mix8x2, desc.operations().to_vec()).unwrap();
    assert_eq!(built, desc);
    assert!(MixDescriptor::new(MixType::Mix8x2, vec![]).is_err());
}

#[test]
fn descriptor_serializes_type_and_operations() {
    let desc = MixDescriptor::from_packed(MixType::Mix8x2, 0);
    let v = serde_json::to_value(&desc).unwrap();
    assert_eq!(v["type"], "8x2");
    assert_eq!(v["operations"].as_array().unwrap().len(), 4);
    assert_eq!(v["operations"][0]["is_xor"], false);
    assert_eq!(v["operations"][0]["rotation_amount"], 0);
}
