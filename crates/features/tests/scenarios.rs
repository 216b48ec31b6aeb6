use features::{
    Feature, FeatureSet, MissingRequirement, SupportLevel, UnknownBit, are_compatible,
    can_use_feature, is_supported_by, missing_requirements,
};

fn unknown_only(bit: u32) -> FeatureSet {
    FeatureSet::empty().with_unknown_bit(UnknownBit::new(bit).expect("bit outside the catalog"))
}

#[test]
fn single_mandatory_feature_at_bit_eight_encodes_to_two_bytes() {
    let _ = logging::init_test_tracing();
    let feature = Feature::from_mandatory_bit(8).expect("bit 8 is assigned");
    let set = FeatureSet::empty().with_feature(feature, SupportLevel::Mandatory);

    assert_eq!(set.encode(), vec![0x01, 0x00]);

    let decoded = FeatureSet::decode(&[0x01, 0x00]);
    assert_eq!(decoded, set);
    assert!(decoded.unknown().is_empty());
}

#[test]
fn empty_feature_set_encodes_to_empty_bytes() {
    assert_eq!(FeatureSet::empty().encode(), Vec::<u8>::new());
    assert_eq!(FeatureSet::decode(&[]), FeatureSet::empty());
}

#[test]
fn odd_unknown_bit_from_sender_is_supported() {
    let _ = logging::init_test_tracing();
    assert!(is_supported_by(&FeatureSet::empty(), &unknown_only(5)));
}

#[test]
fn even_unknown_bit_from_sender_is_not_supported() {
    let _ = logging::init_test_tracing();
    let sender = unknown_only(4);
    assert!(!is_supported_by(&FeatureSet::empty(), &sender));
    assert_eq!(
        missing_requirements(&FeatureSet::empty(), &sender),
        vec![MissingRequirement::UnknownMandatoryBit(
            UnknownBit::new(4).expect("bit outside the catalog")
        )]
    );
}

#[test]
fn optional_receiver_satisfies_mandatory_sender() {
    let feature = Feature::VariableLengthOnion;
    let receiver = FeatureSet::empty().with_feature(feature, SupportLevel::Optional);
    let sender = FeatureSet::empty().with_feature(feature, SupportLevel::Mandatory);
    assert!(is_supported_by(&receiver, &sender));
}

#[test]
fn feature_missing_on_remote_cannot_be_used() {
    let feature = Feature::BasicMultiPartPayment;
    let local = FeatureSet::empty().with_feature(feature, SupportLevel::Optional);
    let remote = FeatureSet::empty();
    assert!(!can_use_feature(&local, &remote, feature));
}

#[test]
fn handshake_between_typical_nodes() {
    let _ = logging::init_test_tracing();
    let local: FeatureSet = "option_data_loss_protect=optional gossip_queries=optional \
                             var_onion_optin=mandatory option_static_remotekey=optional \
                             payment_secret=mandatory basic_mpp=optional keysend"
        .parse()
        .expect("valid configuration");

    // remote: option_data_loss_protect=mandatory, var_onion_optin=mandatory,
    // payment_secret=mandatory, option_anchor_outputs=optional, unknown odd bit 101
    let mut remote_bytes = vec![0u8; 13];
    for bit in [0u32, 8, 14, 21, 101] {
        let len = remote_bytes.len();
        remote_bytes[len - 1 - bit as usize / 8] |= 1 << (bit % 8);
    }
    let remote = FeatureSet::decode(&remote_bytes);

    assert_eq!(
        remote.support_level(Feature::AnchorOutputs),
        Some(SupportLevel::Optional)
    );
    assert!(are_compatible(&local.handshake_scoped(), &remote));
    assert!(!can_use_feature(&local, &remote, Feature::AnchorOutputs));
    assert!(can_use_feature(&local, &remote, Feature::PaymentSecret));

    let strict_remote = remote.with_feature(Feature::AnchorOutputs, SupportLevel::Mandatory);
    assert!(!are_compatible(&local, &strict_remote));
    assert_eq!(
        missing_requirements(&local, &strict_remote),
        vec![MissingRequirement::Feature(Feature::AnchorOutputs)]
    );
}

#[test]
fn node_announcement_and_invoice_views_split_local_features() {
    let local: FeatureSet = "initial_routing_sync var_onion_optin=mandatory payment_secret=mandatory \
                             basic_mpp option_payment_metadata keysend"
        .parse()
        .expect("valid configuration");

    let announced = local.node_announcement_scoped();
    assert!(announced.has_feature(Feature::KeySend, None));
    assert!(!announced.has_feature(Feature::InitialRoutingSync, None));
    assert!(!announced.has_feature(Feature::PaymentMetadata, None));

    let invoice = local.invoice_view();
    assert_eq!(
        invoice.keys().copied().collect::<Vec<_>>(),
        vec![
            Feature::VariableLengthOnion,
            Feature::PaymentSecret,
            Feature::BasicMultiPartPayment,
            Feature::PaymentMetadata,
        ]
    );
    assert_eq!(
        FeatureSet::from(invoice).encode(),
        vec![0x02, 0x00, 0x00, 0x00, 0x02, 0x41, 0x00]
    );
}
