// Integration tests for driftX
use driftx::prelude::*;
use driftx_codec::{
    cluster_comparison_to_mapping, cluster_model_from_mapping, cluster_model_to_mapping,
    descriptor_set_from_mapping, descriptor_set_to_mapping, set_comparison_to_mapping,
};

/// A snapshot with a handful of loosely wine-like columns.
fn snapshot(shift: f64) -> Dataset {
    let alcohol: Vec<f64> = [9.4, 9.8, 10.5, 11.2, 12.8, 10.0, 9.9, 11.5]
        .iter()
        .map(|v| v + shift)
        .collect();
    let ph: Vec<f64> = [3.51, 3.2, 3.26, 3.16, 2.98, 3.3, 3.4, 3.1]
        .iter()
        .map(|v| v + shift / 10.0)
        .collect();
    Dataset::new(vec![
        ("alcohol".to_string(), alcohol),
        ("ph".to_string(), ph),
    ])
    .unwrap()
}

/// Four tight 2-D blobs around distinct corners, optionally shifted.
fn four_blob_snapshot(shift: f64) -> Dataset {
    let centers = [(0.0, 0.0), (12.0, 0.0), (0.0, 12.0), (12.0, 12.0)];
    let offsets = [
        (0.0, 0.0),
        (0.3, 0.1),
        (-0.2, 0.2),
        (0.1, -0.3),
        (-0.1, -0.1),
        (0.2, 0.3),
    ];
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for (cx, cy) in centers {
        for (dx, dy) in offsets {
            xs.push(cx + dx + shift);
            ys.push(cy + dy);
        }
    }
    Dataset::new(vec![("x".to_string(), xs), ("y".to_string(), ys)]).unwrap()
}

#[test]
fn test_descriptor_pipeline() {
    let set = DescriptorSet::compute_all(&snapshot(0.0)).unwrap();
    assert_eq!(set.len(), 2);

    for descriptor in set.iter() {
        assert!(descriptor.min_val <= descriptor.q1);
        assert!(descriptor.q1 <= descriptor.q2);
        assert!(descriptor.q2 <= descriptor.q3);
        assert!(descriptor.q3 <= descriptor.max_val);
        assert!(descriptor.std >= 0.0);
    }
}

#[test]
fn test_drift_between_snapshots() {
    let left = DescriptorSet::compute_all(&snapshot(0.0)).unwrap();
    let right = DescriptorSet::compute_all(&snapshot(1.0)).unwrap();

    let comparison = left.compare(&right).unwrap();
    let alcohol = comparison.get("alcohol").unwrap();
    assert!((alcohol.mean_delta - 1.0).abs() < 1e-9);
    assert!((alcohol.std_delta).abs() < 1e-9);

    // Same set compared with itself shows no drift at all.
    let same = left.compare(&left).unwrap();
    assert!(same.iter().all(|(_, delta)| delta.is_zero()));
}

#[test]
fn test_descriptor_set_wire_round_trip() {
    let set = DescriptorSet::compute_all(&snapshot(0.0)).unwrap();
    let text = serde_json::to_string_pretty(&descriptor_set_to_mapping(&set)).unwrap();
    let reloaded = descriptor_set_from_mapping(&serde_json::from_str(&text).unwrap()).unwrap();
    assert_eq!(set, reloaded);
}

#[test]
fn test_best_fit_recovers_blob_count() {
    let dataset = four_blob_snapshot(0.0);
    let model =
        ClusterModel::best_fit(&dataset, &SearchRange::for_dataset(&dataset), &FitConfig::default())
            .unwrap();
    assert_eq!(model.num_clusters, 4);
    let silhouette = model.silhouette_score.unwrap();
    assert!(silhouette > 0.8 && silhouette <= 1.0);
}

#[test]
fn test_cluster_model_wire_round_trip() {
    let model =
        ClusterModel::fit(&four_blob_snapshot(0.0), 4, &FitConfig::default()).unwrap();
    let text = serde_json::to_string_pretty(&cluster_model_to_mapping(&model)).unwrap();
    let reloaded = cluster_model_from_mapping(&serde_json::from_str(&text).unwrap()).unwrap();
    assert_eq!(model, reloaded);
}

#[test]
fn test_cluster_drift_detection() {
    let config = FitConfig::default();
    let before = ClusterModel::fit(&four_blob_snapshot(0.0), 4, &config).unwrap();
    let after = ClusterModel::fit(&four_blob_snapshot(2.0), 4, &config).unwrap();

    let comparison = compare_models(&before, &after).unwrap();
    assert_eq!(comparison.shifts.len(), 4);
    for shift in &comparison.shifts {
        assert!(shift.centroid_shift > 1.0);
        assert!(shift.centroid_shift < 3.0);
    }

    // Identical fits show no movement.
    let same = compare_models(&before, &before).unwrap();
    assert!(same.is_zero());
}

#[test]
fn test_cluster_count_mismatch_is_fatal() {
    let config = FitConfig::default();
    let a = ClusterModel::fit(&four_blob_snapshot(0.0), 4, &config).unwrap();
    let b = ClusterModel::fit(&four_blob_snapshot(0.0), 3, &config).unwrap();
    assert!(matches!(
        compare_models(&a, &b),
        Err(Error::ClusterCountMismatch { left: 4, right: 3 })
    ));
}

#[test]
fn test_evolution_sequences() {
    let snapshots: Vec<Dataset> = (0..6).map(|i| snapshot(i as f64 * 0.5)).collect();

    let descriptors: Vec<_> = descriptor_evolution(&snapshots, "alcohol").collect();
    assert_eq!(descriptors.len(), 6);
    let means: Vec<f64> = descriptors
        .iter()
        .map(|d| d.as_ref().unwrap().mean)
        .collect();
    assert!(means.windows(2).all(|w| w[1] > w[0]), "means should drift up");

    let sets: Vec<_> = descriptor_set_evolution(&snapshots).collect();
    assert_eq!(sets.len(), 6);

    let blob_snapshots: Vec<Dataset> = (0..3).map(|i| four_blob_snapshot(i as f64)).collect();
    let models: Vec<_> = cluster_evolution(&blob_snapshots, 4, FitConfig::default()).collect();
    assert_eq!(models.len(), 3);
    for model in &models {
        let model = model.as_ref().unwrap();
        assert_eq!(model.num_clusters, 4);
        let total: f64 = model.labels_percentages.iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }
}

#[test]
fn test_comparison_mappings_serialize() {
    let left = DescriptorSet::compute_all(&snapshot(0.0)).unwrap();
    let right = DescriptorSet::compute_all(&snapshot(0.3)).unwrap();
    let mapping = set_comparison_to_mapping(&left.compare(&right).unwrap());
    assert!(mapping.contains_key("alcohol"));
    assert!(mapping.contains_key("ph"));

    let config = FitConfig::default();
    let a = ClusterModel::fit(&four_blob_snapshot(0.0), 2, &config).unwrap();
    let b = ClusterModel::fit(&four_blob_snapshot(0.5), 2, &config).unwrap();
    let mapping = cluster_comparison_to_mapping(&compare_models(&a, &b).unwrap());
    assert!(mapping.contains_key("0"));
    assert!(mapping.contains_key("1"));
    assert!(mapping.contains_key("silhouette_delta"));
}

#[test]
fn test_full_report_cycle() {
    // What a report assembler does: summarize a baseline, persist it, reload
    // it later and compare against fresh snapshots.
    let baseline = four_blob_snapshot(0.0);
    let model =
        ClusterModel::best_fit(&baseline, &SearchRange::for_dataset(&baseline), &FitConfig::default())
            .unwrap();

    let stored = serde_json::to_string(&cluster_model_to_mapping(&model)).unwrap();
    let reloaded = cluster_model_from_mapping(&serde_json::from_str(&stored).unwrap()).unwrap();

    let fresh = ClusterModel::fit(
        &four_blob_snapshot(0.25),
        reloaded.num_clusters,
        &FitConfig::default(),
    )
    .unwrap();
    let comparison = compare_models(&reloaded, &fresh).unwrap();
    assert_eq!(comparison.shifts.len(), model.num_clusters);
    for shift in &comparison.shifts {
        assert!(shift.centroid_shift < 0.5);
    }
}
