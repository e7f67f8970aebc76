//! Integration tests for the puzzle generator.
//!
//! These run the whole pipeline (clue file → generator → numbering → JSON) and check the
//! structural guarantees every generated grid must satisfy.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::process::Command;

use mkpuzzle::clue_list::{Clue, ClueList};
use mkpuzzle::generator::{generate, GenerateError, Generator, GeneratorConfig, Solution};
use mkpuzzle::placement::Direction;
use mkpuzzle::puzzle::{Puzzle, DEFAULT_TITLE};
use mkpuzzle::puzzle_char::BLANK;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn load_fixture(name: &str) -> Vec<Clue> {
    ClueList::load_from_path(fixture(name)).expect("fixture should parse").clues
}

/// Map every cell covered by a word to the indices of the words covering it.
fn coverage(clues: &[Clue], solution: &Solution) -> HashMap<(usize, usize), HashSet<usize>> {
    let mut cover: HashMap<(usize, usize), HashSet<usize>> = HashMap::new();
    for (i, (clue, placement)) in clues.iter().zip(&solution.placements).enumerate() {
        for cell in placement.cells(clue.len()) {
            cover.entry(cell).or_default().insert(i);
        }
    }
    cover
}

/// Every word reads correctly out of the grid (so crossings agree), every letter belongs to a
/// word, and two letters side by side always belong to a common word.
fn assert_well_formed(clues: &[Clue], solution: &Solution) {
    let grid = &solution.grid;
    let size = grid.size();
    assert_eq!(solution.placements.len(), clues.len(), "every word must be placed");

    for (clue, placement) in clues.iter().zip(&solution.placements) {
        let read: String = placement
            .cells(clue.len())
            .map(|(r, c)| grid.get(r, c).expect("word cell inside grid"))
            .collect();
        assert_eq!(read, clue.word, "word at {placement:?} reads back wrong");
    }

    let cover = coverage(clues, solution);
    for row in 0..size {
        for col in 0..size {
            let ch = grid.get(row, col).unwrap();
            if ch == BLANK {
                assert!(!cover.contains_key(&(row, col)));
                continue;
            }
            let here = cover.get(&(row, col)).expect("letter not covered by any word");
            for (r, c) in [(row + 1, col), (row, col + 1)] {
                if grid.get(r, c).is_some_and(|n| n != BLANK) {
                    assert!(
                        !here.is_disjoint(&cover[&(r, c)]),
                        "({row}, {col}) and ({r}, {c}) touch without sharing a word"
                    );
                }
            }
        }
    }
}

/// Words hung off another word never reach the last row or column.
fn assert_far_edge_margin(clues: &[Clue], solution: &Solution, initial: usize) {
    let size = solution.grid.size();
    for (i, (clue, p)) in clues.iter().zip(&solution.placements).enumerate() {
        if i == initial {
            continue;
        }
        let last = match p.direction {
            Direction::Across => p.col + clue.len() - 1,
            Direction::Down => p.row + clue.len() - 1,
        };
        assert!(last < size - 1, "{} ends on the far edge", clue.word);
    }
}

#[cfg(test)]
mod small_lists {
    use super::*;

    #[test]
    fn test_three_words() {
        let clues = load_fixture("three_words.txt");
        let solution = generate(&clues, 6).unwrap();

        assert_well_formed(&clues, &solution);
        assert_far_edge_margin(&clues, &solution, 0);
        assert_eq!(solution.placements[0].row, 3);
        assert_eq!(solution.placements[0].direction, Direction::Across);
    }

    #[test]
    fn test_three_words_too_tight() {
        let clues = load_fixture("three_words.txt");

        assert!(matches!(
            generate(&clues, 5),
            Err(GenerateError::NoSolutionFound { total: 3, .. })
        ));
    }

    #[test]
    fn test_word_longer_than_grid() {
        let clues = ClueList::parse_from_str("ZZZZZZZZZZZZ impossible").unwrap().clues;

        assert!(matches!(
            generate(&clues, 3),
            Err(GenerateError::UnplaceableInitialWord { size: 3, .. })
        ));
    }

    #[test]
    fn test_words_without_shared_letters() {
        let clues = load_fixture("disjoint.txt");

        assert_eq!(
            generate(&clues, 5).unwrap_err(),
            GenerateError::NoSolutionFound { placed: 1, total: 2 }
        );
    }

    #[test]
    fn test_grid_exactly_as_wide_as_initial_word() {
        let clues = ClueList::parse_from_str("CAT feline").unwrap().clues;
        let solution = generate(&clues, 3).unwrap();

        assert_eq!(solution.grid.rows(), vec!["___", "CAT", "___"]);
    }
}

#[cfg(test)]
mod larger_lists {
    use super::*;

    const ANIMALS_15: [&str; 15] = [
        "__________R____",
        "__________A____",
        "__________B____",
        "__________B____",
        "__________I____",
        "______CHEETAH__",
        "___L________O__",
        "___ELEPHANT_R__",
        "___O________S__",
        "___P__Z__OTTER_",
        "GIRAFFE____I___",
        "___R__B____G___",
        "___D__R____E___",
        "_____PANTHER___",
        "_______________",
    ];

    #[test]
    fn test_animals_layout() {
        let clues = load_fixture("animals.txt");
        let solution = generate(&clues, 15).unwrap();

        assert_eq!(solution.grid.rows(), ANIMALS_15);
        assert_well_formed(&clues, &solution);
        assert_far_edge_margin(&clues, &solution, 0);
    }

    #[test]
    fn test_animals_needs_backtracking() {
        let clues = load_fixture("animals.txt");
        let (_, stats) = Generator::new(&clues, 15, GeneratorConfig::default())
            .unwrap()
            .generate()
            .unwrap();

        assert!(stats.backtracks > 0);
        assert_eq!(stats.deepest, clues.len());
    }

    #[test]
    fn test_animals_other_sizes_stay_well_formed() {
        let clues = load_fixture("animals.txt");
        for size in [17, 19, 21] {
            let solution = generate(&clues, size).unwrap();
            assert_well_formed(&clues, &solution);
            assert_far_edge_margin(&clues, &solution, 0);
        }
    }

    #[test]
    fn test_animals_too_small() {
        let clues = load_fixture("animals.txt");

        assert!(matches!(
            generate(&clues, 13),
            Err(GenerateError::NoSolutionFound { placed: 9, total: 10 })
        ));
    }

    #[test]
    fn test_numbering() {
        let clues = load_fixture("animals.txt");
        let puzzle = Puzzle::assemble(DEFAULT_TITLE, &clues, &generate(&clues, 15).unwrap());

        let numbers: Vec<usize> = puzzle.clues.iter().map(|c| c.num).collect();
        assert_eq!(numbers, vec![5, 9, 4, 10, 2, 8, 7, 1, 3, 6]);

        // numbers follow reading order of the distinct start cells
        let mut by_number: Vec<_> = puzzle.clues.iter().map(|c| (c.num, (c.row, c.col))).collect();
        by_number.sort();
        by_number.dedup();
        assert!(by_number.windows(2).all(|w| w[0].1 < w[1].1));
    }

    #[test]
    fn test_deterministic_json() {
        let clues = load_fixture("animals.txt");
        let render = || {
            Puzzle::assemble("Animals", &clues, &generate(&clues, 17).unwrap())
                .to_json()
                .unwrap()
        };

        assert_eq!(render(), render());
    }
}

#[cfg(test)]
mod cli {
    use super::*;

    fn mkpuzzle() -> Command {
        Command::new(env!("CARGO_BIN_EXE_mkpuzzle"))
    }

    fn temp_output(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("mkpuzzle-{}-{name}.json", std::process::id()))
    }

    #[test]
    fn test_writes_json_to_output_file() {
        let out = temp_output("three");
        let status = mkpuzzle()
            .arg(fixture("three_words.txt"))
            .arg("6")
            .arg("--output")
            .arg(&out)
            .status()
            .unwrap();
        assert!(status.success());

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(json["title"], "insert title");
        assert_eq!(json["numRows"], 6);
        assert_eq!(json["answers"][1], "__CAR_");
        assert_eq!(json["clues"][0]["num"], 3);
        let _ = std::fs::remove_file(out);
    }

    #[test]
    fn test_prints_json_to_stdout() {
        let output = mkpuzzle()
            .arg(fixture("three_words.txt"))
            .arg("6")
            .args(["--title", "Tiny"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["title"], "Tiny");
        assert_eq!(json["clues"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_no_solution_writes_nothing() {
        let out = temp_output("disjoint");
        let output = mkpuzzle()
            .arg(fixture("disjoint.txt"))
            .arg("5")
            .arg("-o")
            .arg(&out)
            .output()
            .unwrap();

        assert!(!output.status.success());
        assert!(output.stdout.is_empty());
        assert!(String::from_utf8_lossy(&output.stderr).contains("G004"));
        assert!(!out.exists());
    }

    #[test]
    fn test_malformed_clue_file() {
        let output = mkpuzzle().arg(fixture("malformed.txt")).arg("9").output().unwrap();

        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("L001"));
        assert!(stderr.contains("line 2"));
    }

    #[test]
    fn test_huge_size_rejected() {
        let output = mkpuzzle()
            .arg(fixture("three_words.txt"))
            .arg("4294967296")
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&output.stderr).contains("G001"));
    }

    #[test]
    fn test_zero_size_rejected() {
        let output = mkpuzzle().arg(fixture("three_words.txt")).arg("0").output().unwrap();

        assert!(!output.status.success());
    }
}
