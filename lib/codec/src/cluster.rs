//! Cluster model and cluster comparison mappings.

use serde_json::{json, Value};

use driftx_cluster::{ClusterComparison, ClusterModel};
use driftx_core::{Error, Result};

use crate::value::{optional_f64, require_f64_seq, require_f64_seq_seq, require_usize};
use crate::Mapping;

/// Encode a cluster model as its wire mapping.
///
/// An undefined silhouette (single-cluster model) encodes as null, not a
/// guessed numeric default.
#[must_use]
pub fn cluster_model_to_mapping(model: &ClusterModel) -> Mapping {
    let mut mapping = Mapping::new();
    mapping.insert("num_clusters".to_string(), json!(model.num_clusters));
    mapping.insert(
        "silhouette_score".to_string(),
        json!(model.silhouette_score),
    );
    mapping.insert("centroids".to_string(), json!(model.centroids));
    mapping.insert("radius".to_string(), json!(model.radius));
    mapping.insert(
        "labels_percentages".to_string(),
        json!(model.labels_percentages),
    );
    mapping
}

/// Decode a cluster model from its wire mapping.
///
/// Besides key presence and basic types, the per-cluster sequences must all
/// carry one entry per cluster; anything else is a mismatch, not a model.
pub fn cluster_model_from_mapping(mapping: &Mapping) -> Result<ClusterModel> {
    let num_clusters = require_usize(mapping, "num_clusters")?;
    let silhouette_score = optional_f64(mapping, "silhouette_score")?;
    let centroids = require_f64_seq_seq(mapping, "centroids")?;
    let radius = require_f64_seq(mapping, "radius")?;
    let labels_percentages = require_f64_seq(mapping, "labels_percentages")?;

    if centroids.len() != num_clusters {
        return Err(Error::mismatch("centroids", "one entry per cluster"));
    }
    if radius.len() != num_clusters {
        return Err(Error::mismatch("radius", "one entry per cluster"));
    }
    if labels_percentages.len() != num_clusters {
        return Err(Error::mismatch(
            "labels_percentages",
            "one entry per cluster",
        ));
    }

    Ok(ClusterModel {
        num_clusters,
        centroids,
        radius,
        silhouette_score,
        labels_percentages,
    })
}

/// Encode a cluster comparison keyed by source cluster index, with the
/// overall silhouette delta alongside.
#[must_use]
pub fn cluster_comparison_to_mapping(comparison: &ClusterComparison) -> Mapping {
    let mut mapping = Mapping::new();
    for shift in &comparison.shifts {
        let mut inner = Mapping::new();
        inner.insert("matched".to_string(), json!(shift.matched));
        inner.insert("centroid_shift".to_string(), json!(shift.centroid_shift));
        inner.insert("radius_delta".to_string(), json!(shift.radius_delta));
        inner.insert(
            "population_percentage_delta".to_string(),
            json!(shift.population_percentage_delta),
        );
        mapping.insert(shift.source.to_string(), Value::Object(inner));
    }
    mapping.insert(
        "silhouette_delta".to_string(),
        json!(comparison.silhouette_delta),
    );
    mapping
}

#[cfg(test)]
mod tests {
    use super::*;
    use driftx_cluster::{compare_models, FitConfig};
    use driftx_core::Dataset;

    fn fitted(k: usize) -> ClusterModel {
        let dataset = Dataset::new(vec![
            (
                "x".to_string(),
                vec![0.0, 0.2, -0.1, 10.0, 10.2, 9.9, 5.0, 5.1],
            ),
            (
                "y".to_string(),
                vec![0.1, -0.2, 0.0, 9.8, 10.1, 10.0, 5.2, 4.9],
            ),
        ])
        .unwrap();
        ClusterModel::fit(&dataset, k, &FitConfig::default()).unwrap()
    }

    #[test]
    fn test_model_round_trip() {
        let model = fitted(3);
        let mapping = cluster_model_to_mapping(&model);
        let back = cluster_model_from_mapping(&mapping).unwrap();
        assert_eq!(model, back);
    }

    #[test]
    fn test_model_round_trip_through_text() {
        let model = fitted(2);
        let text = serde_json::to_string_pretty(&cluster_model_to_mapping(&model)).unwrap();
        let reparsed: Mapping = serde_json::from_str(&text).unwrap();
        assert_eq!(model, cluster_model_from_mapping(&reparsed).unwrap());
    }

    #[test]
    fn test_single_cluster_silhouette_is_null() {
        let mapping = cluster_model_to_mapping(&fitted(1));
        assert!(mapping["silhouette_score"].is_null());
        let back = cluster_model_from_mapping(&mapping).unwrap();
        assert_eq!(back.silhouette_score, None);
    }

    #[test]
    fn test_missing_key_names_the_key() {
        let mut mapping = cluster_model_to_mapping(&fitted(2));
        mapping.remove("radius");
        assert_eq!(
            cluster_model_from_mapping(&mapping).unwrap_err(),
            Error::mismatch("radius", "a sequence of numbers")
        );
    }

    #[test]
    fn test_wrong_type_rejected() {
        let mut mapping = cluster_model_to_mapping(&fitted(2));
        mapping.insert("num_clusters".to_string(), json!(2.5));
        assert_eq!(
            cluster_model_from_mapping(&mapping).unwrap_err(),
            Error::mismatch("num_clusters", "an integer")
        );
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let mut mapping = cluster_model_to_mapping(&fitted(2));
        mapping.insert("radius".to_string(), json!([1.0]));
        assert_eq!(
            cluster_model_from_mapping(&mapping).unwrap_err(),
            Error::mismatch("radius", "one entry per cluster")
        );
    }

    #[test]
    fn test_comparison_mapping_layout() {
        let a = fitted(2);
        let b = fitted(2);
        let mapping = cluster_comparison_to_mapping(&compare_models(&a, &b).unwrap());
        assert_eq!(mapping["silhouette_delta"], json!(0.0));
        let pair = mapping["0"].as_object().unwrap();
        assert_eq!(pair["centroid_shift"], json!(0.0));
        assert_eq!(pair["radius_delta"], json!(0.0));
        assert_eq!(pair["population_percentage_delta"], json!(0.0));
    }
}
