use kindred_core::{Character, Generations, Relations};

fn chr(id: &str, p1: Option<&str>, p2: Option<&str>) -> Character {
    Character {
        id: id.to_string(),
        name: id.to_string(),
        parent_1: p1.map(str::to_string),
        parent_2: p2.map(str::to_string),
        ..Default::default()
    }
}

fn assign(records: &[Character]) -> (Relations, Generations) {
    let rel = Relations::infer(records).unwrap();
    let gens = Generations::assign(&rel);
    (rel, gens)
}

#[test]
fn every_parent_child_edge_descends_exactly_one_tier() {
    let records = vec![
        chr("r", None, None),
        chr("c1", Some("r"), None),
        chr("c2", Some("r"), None),
        chr("g", Some("c1"), None),
    ];
    let (rel, gens) = assign(&records);
    for ix in 0..rel.len() {
        for &p in rel.parents(ix) {
            assert_eq!(gens.tier(ix), gens.tier(p) + 1);
        }
    }
}

#[test]
fn married_in_spouse_lands_on_its_partners_tier() {
    // Single root R with children C1 and C2; C1 is married to an external
    // spouse S (no parents of her own) with a child G.
    let records = vec![
        chr("r", None, None),
        chr("c1", Some("r"), None),
        chr("c2", Some("r"), None),
        chr("s", None, None),
        chr("g", Some("c1"), Some("s")),
    ];
    let (rel, gens) = assign(&records);
    assert_eq!(gens.tier(rel.ix("r").unwrap()), 0);
    assert_eq!(gens.tier(rel.ix("c1").unwrap()), 1);
    assert_eq!(gens.tier(rel.ix("c2").unwrap()), 1);
    assert_eq!(gens.tier(rel.ix("s").unwrap()), 1);
    assert_eq!(gens.tier(rel.ix("g").unwrap()), 2);
    assert!(gens.unreachable().is_empty());
}

#[test]
fn spouse_listed_before_the_bloodline_root_still_levels_with_its_partner() {
    // Record order must not matter: S precedes R here.
    let records = vec![
        chr("s", None, None),
        chr("r", None, None),
        chr("c1", Some("r"), None),
        chr("g", Some("c1"), Some("s")),
    ];
    let (rel, gens) = assign(&records);
    assert_eq!(gens.tier(rel.ix("s").unwrap()), 1);
    assert_eq!(gens.tier(rel.ix("c1").unwrap()), 1);
    for (a, b) in rel.partner_pairs() {
        assert_eq!(gens.tier(a), gens.tier(b));
    }
}

#[test]
fn character_with_only_an_unresolvable_parent_is_a_root() {
    let records = vec![chr("orphan", Some("not_in_dataset"), None)];
    let (rel, gens) = assign(&records);
    assert_eq!(gens.tier(rel.ix("orphan").unwrap()), 0);
    assert!(gens.unreachable().is_empty());
}

#[test]
fn parent_cycle_is_anchored_at_tier_zero_and_reported() {
    let records = vec![
        chr("r", None, None),
        chr("a", Some("b"), None),
        chr("b", Some("a"), None),
    ];
    let (rel, gens) = assign(&records);
    assert_eq!(gens.tier(rel.ix("r").unwrap()), 0);
    assert_eq!(gens.unreachable(), &["a".to_string(), "b".to_string()]);
    assert_eq!(gens.tier(rel.ix("a").unwrap()), 0);
    assert_eq!(gens.tier(rel.ix("b").unwrap()), 0);
}

#[test]
fn empty_dataset_assigns_nothing() {
    let (_, gens) = assign(&[]);
    assert!(gens.tiers().is_empty());
    assert!(gens.unreachable().is_empty());
}
