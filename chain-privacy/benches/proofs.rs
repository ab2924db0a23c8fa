use chain_privacy::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;

fn ring_witness(rng: &mut ChaCha20Rng, crs: &Crs) -> OneOfManyWitness {
    let params = crs.pedersen();
    let ring_size = crs.ring().ring_size();
    let index = ring_size / 2;
    let randomness = Scalar::random(rng);
    let commitments = (0..ring_size)
        .map(|i| {
            if i == index {
                params.commit(&Scalar::zero(), &randomness, Slot::Value)
            } else {
                params.commit(&Scalar::random(rng), &Scalar::random(rng), Slot::Value)
            }
        })
        .collect();
    let ring_indices = (0..ring_size as u64).collect();
    OneOfManyWitness::new(
        crs.ring(),
        commitments,
        ring_indices,
        index,
        randomness,
        Slot::Value,
    )
    .unwrap()
}

fn one_of_many_prove(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([0u8; 32]);
    let mut group = c.benchmark_group("One of many prove");

    for &exp in [1usize, 3, 5, 7].iter() {
        let crs = Crs::new(b"bench", RingParameters::new(exp).unwrap());
        let witness = ring_witness(&mut rng, &crs);
        let parameter_string = format!("ring of {}", crs.ring().ring_size());
        group.bench_with_input(
            BenchmarkId::new("Prove", parameter_string),
            &witness,
            |b, w| b.iter(|| OneOfManyProof::prove(&mut rng, &crs, w).unwrap()),
        );
    }

    group.finish();
}

fn one_of_many_verify(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([0u8; 32]);
    let mut group = c.benchmark_group("One of many verify");

    for &exp in [1usize, 3, 5, 7].iter() {
        let crs = Crs::new(b"bench", RingParameters::new(exp).unwrap());
        let witness = ring_witness(&mut rng, &crs);
        let proof = OneOfManyProof::prove(&mut rng, &crs, &witness).unwrap();
        let parameter_string = format!("ring of {}", crs.ring().ring_size());
        group.bench_with_input(
            BenchmarkId::new("Verify", parameter_string),
            &(proof, witness),
            |b, (p, w)| b.iter(|| p.verify(&crs, w.commitments()).unwrap()),
        );
    }

    group.finish();
}

fn binary(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([0u8; 32]);
    let crs = Crs::global();
    let randomness = Scalar::random(&mut rng);
    let commitment = crs
        .pedersen()
        .commit(&Scalar::one(), &randomness, Slot::Value);
    let witness = BinaryWitness::new(commitment, 1, randomness, Slot::Value).unwrap();
    let proof = BinaryProof::prove(&mut rng, crs, &witness).unwrap();

    c.bench_function("Binary prove", |b| {
        b.iter(|| BinaryProof::prove(&mut rng, crs, &witness).unwrap())
    });
    c.bench_function("Binary verify", |b| {
        b.iter(|| proof.verify(crs, &commitment).unwrap())
    });
}

criterion_group!(
    name = proofs;
    config = Criterion::default();
    targets =
    one_of_many_prove,
    one_of_many_verify,
    binary,
);

criterion_main!(proofs);
