// File: tests/tests/key_exchange.rs
// End-to-end exchanges through the public dhkam API
use dhkam_api::{Error, KeyAgreement};
use dhkam_kem::kek::{oid, presets};
use dhkam_kem::{Dh2048, DhPublicKey, KekState};
use dhkam_tests::vectors::{
    exponent_a, exponent_b, CEKS_AES256_CBC_96, PUBLIC_A_SHA256, SHARED_SECRET_96,
};
use dhkam_tests::{seeded_rng, Party};
use proptest::prelude::*;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};
use std::collections::HashSet;

const SHARED_KEY_SIZE: usize = 96;
const CEK_ROUNDS: usize = 5;

#[test]
fn test_full_exchange() {
    let mut rng = OsRng;
    let mut alice = Party::generate(&mut rng, &presets::AES256_CBC_HMAC_SHA512).unwrap();
    let mut bob = Party::generate(&mut rng, &presets::AES256_CBC_HMAC_SHA512).unwrap();

    // Public keys travel as bytes
    let alice_pub = DhPublicKey::from_bytes(&alice.private.export_public()).unwrap();
    let bob_pub = DhPublicKey::from_bytes(&bob.private.export_public()).unwrap();

    let ss_alice = alice
        .private
        .shared_secret(&mut rng, &bob_pub, SHARED_KEY_SIZE)
        .unwrap();
    let ss_bob = bob
        .private
        .shared_secret(&mut rng, &alice_pub, SHARED_KEY_SIZE)
        .unwrap();
    assert_eq!(ss_alice.as_bytes(), ss_bob.as_bytes());

    let mut seen = HashSet::new();
    for _ in 0..CEK_ROUNDS {
        let cek_alice = alice.next_cek(&mut rng, &bob_pub).unwrap();
        let cek_bob = bob.next_cek(&mut rng, &alice_pub).unwrap();
        assert_eq!(cek_alice.len(), SHARED_KEY_SIZE);
        assert_eq!(cek_alice, cek_bob, "CEKs don't match");
        assert!(seen.insert(cek_alice.to_vec()), "CEK repeated");
    }
    assert_eq!(alice.kek.counter(), bob.kek.counter());
}

#[test]
fn test_known_exchange() {
    let mut rng = seeded_rng(2024);
    let preset = &presets::AES256_CBC_HMAC_SHA512;
    let mut alice = Party::import(&mut rng, &exponent_a(), preset).unwrap();
    let mut bob = Party::import(&mut rng, &exponent_b(), preset).unwrap();

    assert_eq!(
        hex::encode(Sha256::digest(alice.private.export_public())),
        PUBLIC_A_SHA256
    );

    let ss = alice
        .private
        .shared_secret(&mut rng, bob.public_key(), SHARED_KEY_SIZE)
        .unwrap();
    assert_eq!(hex::encode(ss.as_bytes()), SHARED_SECRET_96);

    let bob_pub = bob.public_key().clone();
    let alice_pub = alice.public_key().clone();
    for expected in CEKS_AES256_CBC_96 {
        let cek_alice = alice.next_cek(&mut rng, &bob_pub).unwrap();
        let cek_bob = bob.next_cek(&mut rng, &alice_pub).unwrap();
        assert_eq!(hex::encode(cek_alice.as_slice()), expected);
        assert_eq!(cek_alice, cek_bob);
    }
}

#[test]
fn test_independent_states_agree() {
    let mut rng = OsRng;
    let alice = Party::generate(&mut rng, &presets::AES128_GCM).unwrap();
    let bob = Party::generate(&mut rng, &presets::AES128_GCM).unwrap();

    let party_a = [0x5Au8; 64];
    let mut kek1 = KekState::new(oid::AES128_GCM, 16, Some(&party_a)).unwrap();
    let mut kek2 = KekState::new(oid::AES128_GCM, 16, Some(&party_a)).unwrap();

    for _ in 0..CEK_ROUNDS {
        let k1 = kek1
            .derive_key::<Sha256, _>(&mut rng, &alice.private, bob.public_key())
            .unwrap();
        let k2 = kek2
            .derive_key::<Sha256, _>(&mut rng, &bob.private, alice.public_key())
            .unwrap();
        assert_eq!(k1, k2);
    }
}

#[test]
fn test_transported_kek_state() {
    let mut rng = OsRng;
    let mut alice = Party::generate(&mut rng, &presets::AES192_CBC_HMAC_SHA384).unwrap();
    let bob = Party::generate(&mut rng, &presets::AES192_CBC_HMAC_SHA384).unwrap();

    let bob_pub = bob.public_key().clone();
    alice.next_cek(&mut rng, &bob_pub).unwrap();

    // Receiver rebuilds the sender's KEK mid-sequence from its DER form
    let mut received = KekState::from_der(&alice.kek.to_der().unwrap()).unwrap();
    let sent = alice.next_cek(&mut rng, &bob_pub).unwrap();
    let derived = received
        .derive_key::<Sha256, _>(&mut rng, &bob.private, alice.public_key())
        .unwrap();
    assert_eq!(sent, derived);
}

#[test]
fn test_mismatched_parameters_disagree() {
    let mut rng = OsRng;
    let alice = Party::generate(&mut rng, &presets::AES256_GCM).unwrap();
    let bob = Party::generate(&mut rng, &presets::AES256_GCM).unwrap();

    let mut kek_gcm = KekState::new(oid::AES256_GCM, 32, None).unwrap();
    let mut kek_cbc = KekState::new(oid::AES256_CBC, 32, None).unwrap();
    let k1 = kek_gcm
        .derive_key::<Sha256, _>(&mut rng, &alice.private, bob.public_key())
        .unwrap();
    let k2 = kek_cbc
        .derive_key::<Sha256, _>(&mut rng, &bob.private, alice.public_key())
        .unwrap();
    assert_ne!(k1, k2);
}

#[test]
fn test_invalid_inputs_surface_errors() {
    let mut rng = OsRng;
    let alice = Party::generate(&mut rng, &presets::AES256_GCM).unwrap();

    assert!(matches!(
        DhPublicKey::from_bytes(&[0u8; 4]),
        Err(Error::InvalidPublicKey { .. })
    ));
    assert!(matches!(
        Dh2048::import_private_key(&mut rng, &[]),
        Err(Error::InvalidPrivateKey { .. })
    ));
    assert!(matches!(
        alice.private.shared_secret(&mut rng, alice.public_key(), 1024),
        Err(Error::InvalidSharedKey { requested: 1024, .. })
    ));
    assert!(matches!(
        KekState::new(oid::AES256_GCM, 32, Some(&[0u8; 10])),
        Err(Error::InvalidKekParams { .. })
    ));
}

#[test]
fn test_types_cross_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<dhkam_kem::DhPrivateKey>();
    assert_send_sync::<DhPublicKey>();
    assert_send_sync::<dhkam_kem::DhSharedSecret>();
    assert_send_sync::<KekState>();
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn prop_exchange_is_symmetric(seed in any::<u64>(), length in 1usize..=128) {
        let mut rng = seeded_rng(seed);
        let alice = Dh2048::generate_keypair(&mut rng).unwrap();
        let bob = Dh2048::generate_keypair(&mut rng).unwrap();

        let alice_pub = Dh2048::public_key(&alice);
        let bob_pub = Dh2048::public_key(&bob);

        let ss_alice = Dh2048::shared_secret(&mut rng, &alice, &bob_pub, length).unwrap();
        let ss_bob = Dh2048::shared_secret(&mut rng, &bob, &alice_pub, length).unwrap();
        prop_assert_eq!(ss_alice.as_bytes(), ss_bob.as_bytes());
    }
}
