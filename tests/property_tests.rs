use std::sync::Arc;

use proptest::prelude::*;

use pqc_keyset::{
    Error, KeyStatus, KeyTemplate, OutputPrefixType, PrimitiveCategory, PrimitiveSet, hybrid,
    registry,
};

// Strategy for generating key ids, including the prefix edge values
fn key_ids() -> impl Strategy<Value = u32> {
    prop_oneof![Just(0u32), Just(u32::MAX), any::<u32>()]
}

// Strategy for generating output prefix types
fn prefix_types() -> impl Strategy<Value = OutputPrefixType> {
    prop_oneof![
        Just(OutputPrefixType::Standard),
        Just(OutputPrefixType::Legacy),
        Just(OutputPrefixType::Raw),
    ]
}

// Strategy for generating plaintexts, empty included
fn plaintexts() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..512)
}

// Strategy for generating context info strings
fn contexts() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..64)
}

fn roundtrip(
    key_id: u32,
    prefix_type: OutputPrefixType,
    plaintext: &[u8],
    context: &[u8],
) -> Result<Vec<u8>, Error> {
    hybrid::register()?;
    let template = KeyTemplate::new(hybrid::KYBER768_HYBRID_PRIVATE_KEY_TYPE_URL, prefix_type);
    let private = registry::new_key_data(&template)?;
    let public = registry::public_key_data(&private)?;

    let mut encrypt_set = PrimitiveSet::new(PrimitiveCategory::HybridEncrypt);
    let entry = encrypt_set.add_primitive(
        registry::primitive(&public, PrimitiveCategory::HybridEncrypt)?,
        key_id,
        KeyStatus::Enabled,
        prefix_type,
    )?;
    encrypt_set.set_primary(entry)?;
    let encryptor = registry::wrap(Arc::new(encrypt_set))?.into_hybrid_encrypt()?;

    let mut decrypt_set = PrimitiveSet::new(PrimitiveCategory::HybridDecrypt);
    decrypt_set.add_primitive(
        registry::primitive(&private, PrimitiveCategory::HybridDecrypt)?,
        key_id,
        KeyStatus::Enabled,
        prefix_type,
    )?;
    let decryptor = registry::wrap(Arc::new(decrypt_set))?.into_hybrid_decrypt()?;

    let ciphertext = encryptor.encrypt(plaintext, context)?;
    decryptor.decrypt(&ciphertext, context)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10))]

    #[test]
    fn prop_roundtrip_for_any_key_id_and_prefix_type(
        key_id in key_ids(),
        prefix_type in prefix_types(),
        plaintext in plaintexts(),
        context in contexts(),
    ) {
        let recovered = roundtrip(key_id, prefix_type, &plaintext, &context).unwrap();
        prop_assert_eq!(recovered, plaintext);
    }

    #[test]
    fn prop_wrong_context_never_decrypts(
        key_id in key_ids(),
        prefix_type in prefix_types(),
        plaintext in plaintexts(),
        context in contexts(),
    ) {
        hybrid::register().unwrap();
        let template = KeyTemplate::new(
            hybrid::KYBER768_HYBRID_PRIVATE_KEY_TYPE_URL,
            prefix_type,
        );
        let private = registry::new_key_data(&template).unwrap();
        let public = registry::public_key_data(&private).unwrap();

        let mut encrypt_set = PrimitiveSet::new(PrimitiveCategory::HybridEncrypt);
        let entry = encrypt_set
            .add_primitive(
                registry::primitive(&public, PrimitiveCategory::HybridEncrypt).unwrap(),
                key_id,
                KeyStatus::Enabled,
                prefix_type,
            )
            .unwrap();
        encrypt_set.set_primary(entry).unwrap();
        let encryptor = registry::wrap(Arc::new(encrypt_set))
            .unwrap()
            .into_hybrid_encrypt()
            .unwrap();

        let mut decrypt_set = PrimitiveSet::new(PrimitiveCategory::HybridDecrypt);
        decrypt_set
            .add_primitive(
                registry::primitive(&private, PrimitiveCategory::HybridDecrypt).unwrap(),
                key_id,
                KeyStatus::Enabled,
                prefix_type,
            )
            .unwrap();
        let decryptor = registry::wrap(Arc::new(decrypt_set))
            .unwrap()
            .into_hybrid_decrypt()
            .unwrap();

        let ciphertext = encryptor.encrypt(&plaintext, &context).unwrap();
        let mut wrong_context = context.clone();
        wrong_context.push(0xFF);
        let result = decryptor.decrypt(&ciphertext, &wrong_context);
        prop_assert!(matches!(result, Err(Error::Decryption)));
    }
}
