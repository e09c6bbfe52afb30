use std::sync::Arc;

use pqc_keyset::{
    Error, KeyData, KeyStatus, KeyTemplate, OutputPrefixType, PrimitiveCategory, PrimitiveSet,
    Result, hybrid, registry,
};

fn private_template(prefix_type: OutputPrefixType) -> KeyTemplate {
    KeyTemplate::new(hybrid::KYBER768_HYBRID_PRIVATE_KEY_TYPE_URL, prefix_type)
}

/// One generated key, materialized on both sides of the scheme.
struct TestKey {
    key_id: u32,
    prefix_type: OutputPrefixType,
    private: KeyData,
    public: KeyData,
}

fn generate_key(key_id: u32, prefix_type: OutputPrefixType) -> Result<TestKey> {
    let private = registry::new_key_data(&private_template(prefix_type))?;
    let public = registry::public_key_data(&private)?;
    Ok(TestKey {
        key_id,
        prefix_type,
        private,
        public,
    })
}

fn decryptor_over(keys: &[&TestKey]) -> Result<Box<dyn pqc_keyset::HybridDecrypt>> {
    let mut primitives = PrimitiveSet::new(PrimitiveCategory::HybridDecrypt);
    for key in keys {
        let primitive = registry::primitive(&key.private, PrimitiveCategory::HybridDecrypt)?;
        primitives.add_primitive(primitive, key.key_id, KeyStatus::Enabled, key.prefix_type)?;
    }
    registry::wrap(Arc::new(primitives))?.into_hybrid_decrypt()
}

fn encryptor_for(key: &TestKey) -> Result<Box<dyn pqc_keyset::HybridEncrypt>> {
    let mut primitives = PrimitiveSet::new(PrimitiveCategory::HybridEncrypt);
    let primitive = registry::primitive(&key.public, PrimitiveCategory::HybridEncrypt)?;
    let entry =
        primitives.add_primitive(primitive, key.key_id, KeyStatus::Enabled, key.prefix_type)?;
    primitives.set_primary(entry)?;
    registry::wrap(Arc::new(primitives))?.into_hybrid_encrypt()
}

#[test]
fn test_register_is_idempotent() -> Result<()> {
    hybrid::register()?;
    hybrid::register()?;
    Ok(())
}

#[test]
fn test_keyset_roundtrip_with_prefixed_primary() -> Result<()> {
    hybrid::register()?;
    let old_key = generate_key(1, OutputPrefixType::Standard)?;
    let new_key = generate_key(2, OutputPrefixType::Standard)?;

    let encryptor = encryptor_for(&new_key)?;
    let ciphertext = encryptor.encrypt(b"the payload", b"session-42")?;

    // A decryptor over the whole keyset finds the right key by prefix.
    let decryptor = decryptor_over(&[&old_key, &new_key])?;
    assert_eq!(decryptor.decrypt(&ciphertext, b"session-42")?, b"the payload");
    Ok(())
}

#[test]
fn test_raw_key_is_found_by_fallback() -> Result<()> {
    hybrid::register()?;
    let prefixed = generate_key(1, OutputPrefixType::Standard)?;
    let raw = generate_key(2, OutputPrefixType::Raw)?;

    let encryptor = encryptor_for(&raw)?;
    let ciphertext = encryptor.encrypt(b"raw payload", b"")?;

    let decryptor = decryptor_over(&[&prefixed, &raw])?;
    assert_eq!(decryptor.decrypt(&ciphertext, b"")?, b"raw payload");
    Ok(())
}

#[test]
fn test_rotated_keyset_still_decrypts_old_ciphertexts() -> Result<()> {
    hybrid::register()?;
    let old_key = generate_key(10, OutputPrefixType::Standard)?;
    let ciphertext = encryptor_for(&old_key)?.encrypt(b"archived", b"")?;

    // Rotation adds a new primary; the old key stays in the set.
    let new_key = generate_key(11, OutputPrefixType::Standard)?;
    let decryptor = decryptor_over(&[&new_key, &old_key])?;
    assert_eq!(decryptor.decrypt(&ciphertext, b"")?, b"archived");
    Ok(())
}

#[test]
fn test_foreign_ciphertext_fails_without_detail() -> Result<()> {
    hybrid::register()?;
    let key = generate_key(1, OutputPrefixType::Standard)?;
    let other = generate_key(1, OutputPrefixType::Standard)?;

    // Same key id, so the prefix matches, but the key material differs.
    let ciphertext = encryptor_for(&other)?.encrypt(b"not for us", b"")?;
    let decryptor = decryptor_over(&[&key])?;

    let err = decryptor.decrypt(&ciphertext, b"").unwrap_err();
    assert!(matches!(err, Error::Decryption));
    assert_eq!(format!("{err}"), "decryption failed");
    Ok(())
}

#[test]
fn test_context_info_mismatch_fails() -> Result<()> {
    hybrid::register()?;
    let key = generate_key(1, OutputPrefixType::Standard)?;
    let ciphertext = encryptor_for(&key)?.encrypt(b"bound", b"right context")?;
    let decryptor = decryptor_over(&[&key])?;
    assert!(matches!(
        decryptor.decrypt(&ciphertext, b"wrong context"),
        Err(Error::Decryption)
    ));
    Ok(())
}

#[test]
fn test_public_template_cannot_generate_keys() -> Result<()> {
    hybrid::register()?;
    let template = KeyTemplate::new(
        hybrid::KYBER768_HYBRID_PUBLIC_KEY_TYPE_URL,
        OutputPrefixType::Standard,
    );
    assert!(matches!(
        registry::new_key_data(&template),
        Err(Error::UnsupportedParameters(_))
    ));
    Ok(())
}

#[test]
fn test_private_key_data_with_wrong_category_is_rejected() -> Result<()> {
    hybrid::register()?;
    let key = generate_key(1, OutputPrefixType::Standard)?;
    assert!(matches!(
        registry::primitive(&key.private, PrimitiveCategory::HybridEncrypt),
        Err(Error::TypeMismatch { .. })
    ));
    Ok(())
}
