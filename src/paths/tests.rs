use super::*;

use crate::{Orientation, PathIdentity, Sense};

use rand::Rng;
use rand::seq::SliceRandom;

//-----------------------------------------------------------------------------

fn check_names(paths: &PathCollection, names: &[String]) {
    assert_eq!(paths.paths(), names.len(), "Invalid number of paths");
    assert_eq!(paths.is_empty(), names.is_empty(), "Invalid emptiness");
    for (path, name) in names.iter().enumerate() {
        assert_eq!(paths.path_name(path), name.as_str(), "Invalid name for path {}", path);
        assert_eq!(paths.get_path_name(path), name.as_str(), "Invalid name for path {} from the graph interface", path);
        assert!(paths.has_path(name), "Path {} not found", name);
        assert_eq!(paths.path_handle(name), Some(path), "Invalid handle for path {}", name);
    }
}

#[test]
fn empty_collection() {
    let paths = PathCollection::new();
    check_names(&paths, &[]);
    assert!(!paths.has_path(""), "Found the empty name in an empty collection");
    assert!(paths.for_each_path_handle(|_| false), "Iteration over an empty collection stopped");
}

#[test]
fn add_paths() {
    let mut names: Vec<String> = Vec::new();
    for sample in ["HG002", "HG003", "NA19239"].iter() {
        for haplotype in 1..3 {
            for contig in 1..5 {
                names.push(format!("{}#{}#chr{}#0", sample, haplotype, contig));
            }
        }
    }
    names.push(String::from("GRCh38#0#chr1"));
    names.push(String::from("alt_contig"));
    names.push(String::new());
    names.shuffle(&mut rand::thread_rng());

    let mut paths = PathCollection::new();
    for (index, name) in names.iter().enumerate() {
        assert!(!paths.has_path(name), "Path {} found before it was added", name);
        let path = paths.add_path(name, false);
        assert_eq!(path, index, "Invalid identifier for path {}", name);
    }
    check_names(&paths, &names);
    assert_eq!(paths.path_handle("HG002#1#chr9#0"), None, "Found a nonexistent path");
}

#[test]
#[should_panic]
fn duplicate_path() {
    let mut paths = PathCollection::new();
    let _ = paths.add_path("GRCh38#0#chr1", false);
    let _ = paths.add_path("GRCh38#0#chr1", true);
}

#[test]
#[should_panic]
fn duplicate_identity() {
    let mut paths = PathCollection::new();
    let identity = PathIdentity::reference("S", 0, "L");
    assert!(paths.create_path(&identity, false).is_ok(), "Could not create the first path");
    let _ = paths.create_path(&identity, false);
}

#[test]
fn path_enumeration() {
    let mut paths = PathCollection::new();
    for i in 0..10 {
        let _ = paths.add_path(&format!("path{}", i), i % 2 == 0);
    }
    let mut found = Vec::new();
    assert!(paths.for_each_path_handle(|path| { found.push(path); true }), "Iteration did not finish");
    assert_eq!(found, (0..10).collect::<Vec<usize>>(), "Invalid path order");

    let mut found = Vec::new();
    assert!(!paths.for_each_path_handle(|path| { found.push(path); path < 4 }), "Iteration did not stop");
    assert_eq!(found, vec![0, 1, 2, 3, 4], "Invalid paths before stopping");

    for path in 0..paths.paths() {
        assert_eq!(paths.is_circular(path), path % 2 == 0, "Invalid circularity for path {}", path);
    }
}

//-----------------------------------------------------------------------------

#[test]
fn steps() {
    let mut paths = PathCollection::new();
    let first = paths.add_path("first", false);
    let second = paths.add_path("second", true);

    let mut rng = rand::thread_rng();
    let mut truth: Vec<Vec<usize>> = vec![Vec::new(), Vec::new()];
    let mut occurrences: Vec<Vec<Step>> = vec![Vec::new(); 10];
    for _ in 0..100 {
        let path = if rng.gen_bool(0.5) { first } else { second };
        let orientation = if rng.gen_bool(0.5) { Orientation::Forward } else { Orientation::Reverse };
        let handle = support::encode_node(rng.gen_range(1..10), orientation);
        let step = paths.append_step(path, handle);
        assert_eq!(step, Step::new(path, truth[path].len()), "Invalid step for a visit on path {}", path);
        assert_eq!(paths.handle_of_step(step), handle, "Invalid handle for step {:?}", step);
        assert_eq!(paths.get_path_handle_of_step(step), path, "Invalid path for step {:?}", step);
        truth[path].push(handle);
        occurrences[support::node_id(handle)].push(step);
    }

    for path in 0..paths.paths() {
        assert_eq!(paths.step_count(path), truth[path].len(), "Invalid step count for path {}", path);
        assert_eq!(paths.path(path), truth[path].as_slice(), "Invalid node visits on path {}", path);
    }

    // Steps on each node in both orientations, in the order they were appended.
    for id in 0..occurrences.len() {
        for &orientation in [Orientation::Forward, Orientation::Reverse].iter() {
            let mut found: Vec<Step> = Vec::new();
            let finished = paths.for_each_step_on_handle(support::encode_node(id, orientation), |step| { found.push(step); true });
            assert!(finished, "Iteration over steps on node {} did not finish", id);
            assert_eq!(found, occurrences[id], "Invalid steps on node {} ({:?})", id, orientation);
        }
    }
}

#[test]
fn step_order() {
    let mut paths = PathCollection::new();
    let first = paths.add_path("first", false);
    let second = paths.add_path("second", false);
    let node = support::encode_node(3, Orientation::Forward);
    let a = paths.append_step(second, node);
    let b = paths.append_step(first, support::flip_node(node));
    let _ = paths.append_step(first, support::encode_node(4, Orientation::Forward));
    let c = paths.append_step(first, node);

    let mut found: Vec<Step> = Vec::new();
    assert!(paths.for_each_step_on_handle(node, |step| { found.push(step); true }), "Iteration did not finish");
    assert_eq!(found, vec![a, b, c], "Steps are not in the order they were appended");
    assert_eq!(c, Step::from((first, 2)), "Invalid step for the last visit");

    let mut found: Vec<Step> = Vec::new();
    assert!(!paths.for_each_step_on_handle(node, |step| { found.push(step); false }), "Iteration did not stop");
    assert_eq!(found, vec![a], "Invalid steps before stopping");
}

//-----------------------------------------------------------------------------

#[test]
fn metadata() {
    let mut paths = PathCollection::new();
    let reference = paths.create_path(&PathIdentity::reference("GRCh38", 0, "chrM"), true).unwrap();
    let haplotype = paths.create_path(&PathIdentity::haplotype("HG002", 2, "chrM", 3), true).unwrap();
    let generic = paths.add_path("chrM_alt", false);
    let unstructured = paths.add_path("chrM#alt#1", false);

    assert_eq!(paths.path_name(reference), "GRCh38#0#chrM", "Invalid name for a reference path");
    assert_eq!(paths.path_name(haplotype), "HG002#2#chrM#3", "Invalid name for a haplotype path");
    assert_eq!(paths.get_sense(reference), Sense::Reference, "Invalid sense for a reference path");
    assert_eq!(paths.get_sense(haplotype), Sense::Haplotype, "Invalid sense for a haplotype path");
    assert_eq!(paths.get_sense(generic), Sense::Reference, "A bare name should be a reference locus");
    assert_eq!(paths.get_sense(unstructured), Sense::Generic, "Invalid sense for a generic path");
    assert_eq!(paths.get_phase_block(haplotype), Some(3), "Invalid phase block");
    assert_eq!(paths.get_locus_name(generic), Some(String::from("chrM_alt")), "Invalid locus name for a bare name");
    assert_eq!(paths.get_sample_name(generic), None, "A bare name should not have a sample");
}

//-----------------------------------------------------------------------------
