use bridge_core::io::pbn;
use bridge_core::{Card, Deal, Partnership, Position};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;

#[derive(Debug, Deserialize)]
struct TestVector {
    name: String,
    deal: String,
    normalized: Option<String>,
    hcp: [usize; 4],
    shapes: [String; 4],
    blocked: HashMap<String, [bool; 4]>,
}

fn load_vectors() -> Vec<TestVector> {
    let yaml_content = fs::read_to_string("../../tests/deal/notation.yaml")
        .expect("Failed to read test vectors");
    serde_yaml::from_str(&yaml_content).expect("Failed to parse test vectors")
}

fn shape_string(deal: &Deal, pos: Position) -> String {
    deal.distribution_for_seat(pos)
        .to_array()
        .iter()
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join("-")
}

#[test]
fn test_notation_vectors() {
    for vector in load_vectors() {
        let deal: Deal = vector
            .deal
            .parse()
            .unwrap_or_else(|e| panic!("{}: {}", vector.name, e));

        let cards: HashSet<Card> = deal.hands().iter().flat_map(|h| h.cards()).collect();
        assert_eq!(cards.len(), 52, "{}: cards are not unique", vector.name);

        let expected = vector.normalized.as_deref().unwrap_or(&vector.deal);
        assert_eq!(deal.to_string(), expected, "{}: encoding", vector.name);
        assert_eq!(deal.hcp_per_seat(), vector.hcp, "{}: hcp", vector.name);
        assert_eq!(deal.hcp_per_seat().iter().sum::<usize>(), 40);

        for (pos, shape) in Position::ALL.iter().zip(&vector.shapes) {
            assert_eq!(&shape_string(&deal, *pos), shape, "{}: shape of {}", vector.name, pos);
        }

        for (seat, blocked) in &vector.blocked {
            let pos = Position::from_char(seat.chars().next().unwrap()).unwrap();
            assert_eq!(
                deal.blocked_for_seat(pos),
                *blocked,
                "{}: blocked for {}",
                vector.name,
                pos
            );
        }
    }
}

#[test]
fn test_roundtrip_from_every_seat() {
    for vector in load_vectors() {
        let deal: Deal = vector.deal.parse().unwrap();
        for start in Position::ALL {
            let reparsed = pbn::import_deal(&deal.to_pbn(start)).unwrap();
            assert_eq!(reparsed, deal, "{}: roundtrip from {}", vector.name, start);
        }
    }
}

#[test]
fn test_team_aggregates() {
    for vector in load_vectors() {
        let deal: Deal = vector.deal.parse().unwrap();
        for team in Partnership::ALL {
            let [a, b] = team.seats();
            assert_eq!(
                deal.hcp_for_team(team),
                deal.hcp_for_seat(a) + deal.hcp_for_seat(b)
            );

            let team_shape = deal.distribution_for_team(team).to_array();
            let (sa, sb) = (
                deal.distribution_for_seat(a).to_array(),
                deal.distribution_for_seat(b).to_array(),
            );
            for i in 0..4 {
                assert_eq!(team_shape[i], sa[i] + sb[i]);
            }
            assert_eq!(team_shape.iter().sum::<usize>(), 26);

            let team_blocked = deal.blocked_for_team(team);
            let (ba, bb) = (deal.blocked_for_seat(a), deal.blocked_for_seat(b));
            for i in 0..4 {
                assert_eq!(team_blocked[i], ba[i] || bb[i], "{}", vector.name);
            }
        }
    }
}
