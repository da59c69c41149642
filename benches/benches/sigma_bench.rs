//! Sigma Protocol Benchmarks
//!
//! - group exponentiation and element encoding
//! - preimage proofs under both Fiat-Shamir backends
//! - OR proofs and ElGamal validity proofs by number of disjuncts

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sigma_algebra::Element;
use sigma_benches::{bench_group, bench_rng, encoded_choices, DISJUNCT_COUNTS};
use sigma_morphisms::{apply, composite, generator, product, Function};
use sigma_proofs::{
    MembershipWitness, OrWitness, PreimageOrProofGenerator, PreimageProofGenerator, ProofGenerator,
    SigmaConfig,
};
use sigma_schemes::{ElGamalEncryptionScheme, ElGamalValidityProofGenerator};

/// Benchmark group exponentiation and element encoding
fn bench_group_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_operations");
    let g = bench_group();
    let mut rng = bench_rng();
    let base = g.random_element(&mut rng);
    let exponent = g.zmod_order().unwrap().random_element(&mut rng);

    group.bench_function("self_apply", |b| {
        b.iter(|| black_box(&base).self_apply_by(black_box(&exponent)).unwrap())
    });
    group.bench_function("apply", |b| b.iter(|| black_box(&base).apply(black_box(&base)).unwrap()));
    group.bench_function("to_bytes", |b| b.iter(|| black_box(&base).to_bytes().unwrap()));
    group.finish();
}

fn two_base_function() -> Function {
    let g = bench_group();
    let bases = g.independent_generators(2, b"bench-preimage").unwrap();
    composite(vec![
        product(vec![generator(&g, &bases[0]).unwrap(), generator(&g, &bases[1]).unwrap()]),
        apply(&g.as_monoid(), 2),
    ])
    .unwrap()
}

/// Benchmark preimage proofs for `(x, r) ↦ g^x ∘ h^r`
fn bench_preimage_proofs(c: &mut Criterion) {
    let mut group = c.benchmark_group("preimage_proof");
    let function = two_base_function();
    let mut rng = bench_rng();
    let secret = function.domain().random_element(&mut rng);
    let public = function.apply(&secret).unwrap();

    for (label, config) in [
        ("sha256", SigmaConfig::default()),
        ("transcript", SigmaConfig::with_transcript()),
    ] {
        let pg = PreimageProofGenerator::non_interactive(function.clone(), None, &config).unwrap();
        let proof = pg.generate(&secret, &public, &mut rng).unwrap();

        group.bench_function(BenchmarkId::new("generate", label), |b| {
            b.iter(|| pg.generate(black_box(&secret), black_box(&public), &mut rng).unwrap())
        });
        group.bench_function(BenchmarkId::new("verify", label), |b| {
            b.iter(|| pg.verify(black_box(&proof), black_box(&public)).unwrap())
        });
    }
    group.finish();
}

/// Benchmark OR proofs as the number of disjuncts grows
fn bench_or_proofs(c: &mut Criterion) {
    let mut group = c.benchmark_group("or_proof");
    let g = bench_group();
    let mut rng = bench_rng();

    for &count in DISJUNCT_COUNTS.iter() {
        let functions = g
            .independent_generators(count, b"bench-or")
            .unwrap()
            .iter()
            .map(|base| generator(&g, base).unwrap())
            .collect::<Vec<_>>();
        let secret = functions[0].domain().random_element(&mut rng);
        let mut publics = vec![functions[0].apply(&secret).unwrap()];
        publics.extend((1..count).map(|_| g.random_element(&mut rng)));
        let public = Element::tuple(publics);
        let pg = PreimageOrProofGenerator::non_interactive(functions, None, &SigmaConfig::default())
            .unwrap();
        let witness = OrWitness::new(secret, 0);
        let proof = pg.generate(&witness, &public, &mut rng).unwrap();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("generate", count), &count, |b, _| {
            b.iter(|| pg.generate(black_box(&witness), black_box(&public), &mut rng).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("verify", count), &count, |b, _| {
            b.iter(|| pg.verify(black_box(&proof), black_box(&public)).unwrap())
        });
    }
    group.finish();
}

/// Benchmark ElGamal validity proofs by candidate count
fn bench_validity_proofs(c: &mut Criterion) {
    let mut group = c.benchmark_group("elgamal_validity");
    let scheme = ElGamalEncryptionScheme::new(bench_group()).unwrap();
    let mut rng = bench_rng();
    let (_, public_key) = scheme.key_pair(&mut rng).unwrap();

    for &count in DISJUNCT_COUNTS.iter() {
        let plaintexts = encoded_choices(scheme.group(), count);
        let (ciphertext, r) = scheme
            .encrypt(&public_key, &plaintexts[count - 1], &mut rng)
            .unwrap();
        let pg = ElGamalValidityProofGenerator::non_interactive(
            scheme.clone(),
            public_key.clone(),
            plaintexts,
            None,
            &SigmaConfig::default(),
        )
        .unwrap();
        let witness = MembershipWitness::new(r, count - 1);
        let proof = pg.generate(&witness, &ciphertext, &mut rng).unwrap();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("generate", count), &count, |b, _| {
            b.iter(|| pg.generate(black_box(&witness), black_box(&ciphertext), &mut rng).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("verify", count), &count, |b, _| {
            b.iter(|| pg.verify(black_box(&proof), black_box(&ciphertext)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_group_operations,
    bench_preimage_proofs,
    bench_or_proofs,
    bench_validity_proofs
);
criterion_main!(benches);
