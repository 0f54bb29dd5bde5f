//! Integration tests for the LVQ engine.

use lvq::synthetic::{clustered_dataset, random_dataset};
use lvq::{
    classify, train, Classifier, Codebook, Dataset, Euclidean, LvqConfig, LvqError, LvqTrainer,
    MetricKind, TerminationReason,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Two well-separated points, one per class.
fn two_point_dataset() -> Dataset {
    Dataset::from_pairs(vec![(vec![1.0, 0.0], 0), (vec![0.0, 1.0], 1)]).unwrap()
}

/// One cluster per class around the unit vector `e_class`, samples interleaved
/// by class, each coordinate jittered by at most `spread`.
fn one_hot_clusters(per_class: usize, classes: usize, spread: f32, rng: &mut ChaCha8Rng) -> Dataset {
    let pairs = (0..per_class * classes).map(|i| {
        let class = i % classes;
        let v: Vec<f32> = (0..classes)
            .map(|d| {
                let centre = if d == class { 1.0 } else { 0.0 };
                centre + rng.gen_range(-spread..spread)
            })
            .collect();
        (v, class)
    });
    Dataset::from_pairs(pairs.collect::<Vec<_>>()).unwrap()
}

fn two_point_config(max_iter: usize) -> LvqConfig {
    LvqConfig {
        dimension: 2,
        classes: 2,
        codebook_size: 2,
        max_iter,
        ..LvqConfig::new(2, 0.5)
    }
}

#[test]
fn test_end_to_end_single_epoch() {
    let codebook = Codebook::from_vectors(vec![vec![0.5, 0.5], vec![0.5, 0.5]]).unwrap();
    let trainer = LvqTrainer::new(two_point_config(1));

    let (codebook, report) = trainer.train_from(codebook, &two_point_dataset()).unwrap();

    // Each slot covers half the distance to its class sample.
    assert_eq!(codebook.get(0).unwrap().as_slice(), [0.75, 0.25]);
    assert_eq!(codebook.get(1).unwrap().as_slice(), [0.25, 0.75]);
    assert_eq!(report.reason, TerminationReason::Exhausted);

    assert_eq!(classify(&[1.0, 0.0], &codebook).unwrap(), 0);
    assert_eq!(classify(&[0.0, 1.0], &codebook).unwrap(), 1);
}

#[test]
fn test_training_converges_on_separable_data() {
    let mut data_rng = ChaCha8Rng::seed_from_u64(100);
    let dataset = one_hot_clusters(50, 4, 0.02, &mut data_rng);

    // Start each slot at a sample of its own class so every sample is
    // classified correctly and the codebook only contracts.
    let start: Vec<Vec<f32>> = (0..4)
        .map(|class| dataset.vectors()[class].clone())
        .collect();
    let codebook = Codebook::from_vectors(start).unwrap();

    let config = LvqConfig {
        epsilon: Some(2.0),
        max_iter: 500,
        ..LvqConfig::new(200, 0.1)
    };
    let (codebook, report) = LvqTrainer::new(config).train_from(codebook, &dataset).unwrap();

    assert_eq!(report.reason, TerminationReason::Converged);
    assert!(report.epochs < 500);

    let classifier = Classifier::new(Euclidean);
    assert_eq!(classifier.accuracy(&dataset, &codebook).unwrap(), 1.0);
    assert!(classifier.quantization_error(&dataset, &codebook).unwrap() < 0.1);
}

#[test]
fn test_random_initialization_and_noise() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let dataset = random_dataset(1000, 4, 4, &mut rng).unwrap();

    let config = LvqConfig {
        max_iter: 3,
        ..LvqConfig::new(1000, 0.01)
    };
    let (codebook, reason) = train(&dataset, &config, &mut rng).unwrap();

    assert_eq!(reason, TerminationReason::Exhausted);
    assert_eq!(codebook.len(), 4);
    assert_eq!(codebook.dimension(), 4);
    assert!(codebook.iter().flatten().all(|w| w.is_finite()));
}

#[test]
fn test_parallel_training_matches_sequential() {
    let mut data_rng = ChaCha8Rng::seed_from_u64(3);
    let dataset = random_dataset(300, 8, 5, &mut data_rng).unwrap();

    let config = LvqConfig {
        dimension: 8,
        classes: 5,
        codebook_size: 5,
        max_iter: 5,
        seed: Some(77),
        ..LvqConfig::new(300, 0.01)
    };
    let (seq, seq_report) = LvqTrainer::new(config.clone()).train(&dataset).unwrap();
    let (par, par_report) = LvqTrainer::new(LvqConfig { parallel: true, ..config })
        .train(&dataset)
        .unwrap();

    assert_eq!(seq, par);
    assert_eq!(seq_report, par_report);
}

#[test]
fn test_max_iter_zero_leaves_codebook_untouched() {
    let config = LvqConfig { seed: Some(8), ..two_point_config(0) };
    let mut trainer = LvqTrainer::new(config.clone());
    let initial = trainer.initialize().unwrap();

    let (trained, report) = LvqTrainer::new(config)
        .train_from(initial.clone(), &two_point_dataset())
        .unwrap();

    assert_eq!(trained, initial);
    assert_eq!(report.reason, TerminationReason::Exhausted);
    assert_eq!(report.epochs, 0);
    assert!(report.history.is_empty());
}

#[test]
fn test_invalid_learning_rate_reported_before_training() {
    for alpha in [0.0f32, -1.0] {
        let config = LvqConfig { learning_rate: alpha, ..two_point_config(5) };
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(
            train(&two_point_dataset(), &config, &mut rng).unwrap_err(),
            LvqError::InvalidLearningRate(alpha)
        );
    }
}

#[test]
fn test_compression_roundtrip_is_lossy_but_class_aware() {
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let dataset = one_hot_clusters(20, 3, 0.01, &mut rng);
    let start: Vec<Vec<f32>> = (0..3).map(|c| dataset.vectors()[c].clone()).collect();
    let codebook = Codebook::from_vectors(start).unwrap();

    let config = LvqConfig {
        dimension: 3,
        classes: 3,
        codebook_size: 3,
        max_iter: 20,
        ..LvqConfig::new(60, 0.2)
    };
    let (codebook, _) = LvqTrainer::new(config).train_from(codebook, &dataset).unwrap();

    let classifier = Classifier::new(MetricKind::Euclidean);
    let indices = classifier.classify_all(&dataset, &codebook).unwrap();
    assert_eq!(indices, dataset.labels());

    let decoded = codebook.decode(&indices).unwrap();
    for (original, restored) in dataset.vectors().iter().zip(&decoded) {
        let err: f32 = original
            .iter()
            .zip(restored)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f32::max);
        assert!(err < 0.05);
    }
}

#[test]
fn test_clustered_synthetic_data_trains() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let dataset = clustered_dataset(80, 3, 4, 0.05, &mut rng).unwrap();

    let config = LvqConfig {
        dimension: 3,
        max_iter: 5,
        seed: Some(5),
        ..LvqConfig::new(80, 0.05)
    };
    let (codebook, report) = LvqTrainer::new(config).train(&dataset).unwrap();

    assert_eq!(report.history.len(), report.epochs);
    let acc = Classifier::new(Euclidean).accuracy(&dataset, &codebook).unwrap();
    assert!((0.0..=1.0).contains(&acc));
}

#[test]
fn test_raw_difference_metric_is_selectable() {
    let config = LvqConfig {
        metric: MetricKind::RawDifference,
        max_iter: 3,
        seed: Some(1),
        ..two_point_config(3)
    };
    let (codebook, report) = LvqTrainer::new(config).train(&two_point_dataset()).unwrap();
    assert_eq!(report.epochs, 3);
    assert_eq!(codebook.len(), 2);
}
