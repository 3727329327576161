// Copyright (c) 2023 Bastiaan Marinus van de Weerd


#[derive(Default)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct Cubes {
	red: u32,
	green: u32,
	blue: u32,
}

impl Cubes {
	fn fits_in(&self, bag: &Cubes) -> bool {
		self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
	}
}

struct Game {
	id: u32,
	/// Highest count seen for each color across all of the game's draws.
	seen: Cubes,
}

const BAG: Cubes = Cubes { red: 12, green: 13, blue: 14 };


fn input_games_from_str(s: &str) -> impl Iterator<Item = Game> + '_ {
	parsing::games_from_str(s).map(|r| r.unwrap())
}

fn input_games() -> impl Iterator<Item = Game> {
	input_games_from_str(include_str!("day02.txt"))
}


fn part1_impl(input_games: impl Iterator<Item = Game>) -> u32 {
	input_games
		.filter(|game| game.seen.fits_in(&BAG))
		.map(|game| game.id)
		.sum()
}

pub(crate) fn part1() -> u32 {
	part1_impl(input_games())
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Cubes, Game};

	#[derive(Debug)]
	pub(super) enum GameError {
		Format,
		Id(ParseIntError),
	}

	impl FromStr for Game {
		type Err = GameError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (game, draws) = s.split_once(": ").ok_or(GameError::Format)?;
			let id = game.strip_prefix("Game ").ok_or(GameError::Format)?
				.parse().map_err(GameError::Id)?;

			let mut seen = Cubes::default();
			for draw in draws.split("; ") {
				for cubes in draw.split(", ") {
					// Malformed pairs, unknown colors, and counts that fail
					// to parse all read as absent rather than as errors
					let Some((count, color)) = cubes.split_once(' ') else { continue };
					let count = count.parse().unwrap_or(0);
					let max_seen = match color {
						"red" => &mut seen.red,
						"green" => &mut seen.green,
						"blue" => &mut seen.blue,
						_ => continue,
					};
					*max_seen = (*max_seen).max(count);
				}
			}

			Ok(Game { id, seen })
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct GamesError {
		line: usize,
		source: GameError,
	}

	pub(super) fn games_from_str(s: &str) -> impl Iterator<Item = Result<Game, GamesError>> + '_ {
		s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| GamesError { line: l + 1, source: e }))
	}

	#[test]
	fn tests() {
		let game: Game = "Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green".parse().unwrap();
		assert_eq!(game.id, 1);
		assert_eq!(game.seen, Cubes { red: 4, green: 2, blue: 6 });

		let lenient: Game = "Game 12: twelve red, 3 blue".parse().unwrap();
		assert_eq!(lenient.seen, Cubes { red: 0, green: 0, blue: 3 });

		assert!(matches!("Game one: 1 red".parse::<Game>(), Err(GameError::Id(_))));
		assert!(matches!("1 red, 2 green".parse::<Game>(), Err(GameError::Format)));
	}
}


#[cfg(test)]
mod tests {
	use {indoc::indoc, itertools::Itertools as _};
	use super::*;


	const INPUT: &str = indoc! { "
		Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
		Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
		Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
		Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
		Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
	" };

	#[test]
	fn tests() {
		let feasible = input_games_from_str(INPUT)
			.filter(|game| game.seen.fits_in(&BAG))
			.map(|game| game.id)
			.collect_vec();
		assert_eq!(feasible, [1, 2, 5]);
		assert_eq!(part1_impl(input_games_from_str(INPUT)), 8);
		assert_eq!(part1(), 8);
	}
}
