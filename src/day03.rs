// Copyright (c) 2023 Bastiaan Marinus van de Weerd


struct Schematic {
	/// Row-major cells; always exactly `rows * columns` long.
	cells: Vec<u8>,
	rows: usize,
	columns: usize,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(Debug))]
struct NumberSpan {
	row: usize,
	start: usize,
	/// Inclusive.
	end: usize,
}

fn is_symbol(cell: u8) -> bool {
	!cell.is_ascii_alphanumeric() && cell != b'.' && !cell.is_ascii_whitespace()
}

impl Schematic {
	fn row(&self, row: usize) -> &[u8] {
		&self.cells[row * self.columns..][..self.columns]
	}

	fn cell(&self, row: usize, column: usize) -> u8 {
		self.cells[row * self.columns + column]
	}

	/// Expands from a digit cell to the maximal span of digits in its row.
	fn number_span_at(&self, row: usize, column: usize) -> NumberSpan {
		let cells = self.row(row);
		let start = (0..column).rev()
			.take_while(|&c| cells[c].is_ascii_digit())
			.last()
			.unwrap_or(column);
		let end = (column + 1..self.columns)
			.take_while(|&c| cells[c].is_ascii_digit())
			.last()
			.unwrap_or(column);
		NumberSpan { row, start, end }
	}

	fn number_value(&self, span: NumberSpan) -> u32 {
		// Span cells were digit-checked during expansion; a failed
		// parse nevertheless reads as zero rather than panicking
		std::str::from_utf8(&self.row(span.row)[span.start..=span.end]).ok()
			.and_then(|s| s.parse().ok())
			.unwrap_or(0)
	}
}


fn input_schematic_from_str(s: &str) -> Schematic {
	s.parse().unwrap()
}

fn input_schematic() -> Schematic {
	input_schematic_from_str(include_str!("day03.txt"))
}


fn part1_impl(schematic: &Schematic) -> u32 {
	use {std::collections::HashSet, itertools::Itertools as _};

	let mut spans = HashSet::new();

	for row in 0..schematic.rows {
		let cells = schematic.row(row);

		// Rows without any symbol cannot anchor part numbers
		if !cells.iter().copied().any(is_symbol) { continue }

		for column in cells.iter().copied().positions(is_symbol) {
			let mut found_digit = |row: usize, column: usize| {
				if !schematic.cell(row, column).is_ascii_digit() { return false }
				spans.insert(schematic.number_span_at(row, column));
				true
			};

			// Above: the cell straight up shadows both diagonals (they
			// would be part of the same span), otherwise each diagonal
			// may start a span of its own
			if row > 0 && !found_digit(row - 1, column) {
				if column > 0 { found_digit(row - 1, column - 1); }
				if column + 1 < schematic.columns { found_digit(row - 1, column + 1); }
			}

			// Below, symmetrically
			if row + 1 < schematic.rows && !found_digit(row + 1, column) {
				if column > 0 { found_digit(row + 1, column - 1); }
				if column + 1 < schematic.columns { found_digit(row + 1, column + 1); }
			}

			if column > 0 { found_digit(row, column - 1); }
			if column + 1 < schematic.columns { found_digit(row, column + 1); }
		}
	}

	// A span flanked by several symbols still counts only once
	spans.into_iter().map(|span| schematic.number_value(span)).sum()
}

pub(crate) fn part1() -> u32 {
	part1_impl(&input_schematic())
}


mod parsing {
	use std::str::FromStr;
	use super::Schematic;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum SchematicError {
		Empty,
		Width { line: usize, found: usize, expected: usize },
	}

	impl FromStr for Schematic {
		type Err = SchematicError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut lines = s.lines();
			let first = lines.next().ok_or(SchematicError::Empty)?;
			let columns = first.len();
			if columns == 0 { return Err(SchematicError::Empty) }

			let mut cells = Vec::from(first.as_bytes());
			let mut rows = 1;
			for (l, line) in lines.enumerate() {
				if line.len() != columns {
					return Err(SchematicError::Width { line: l + 2, found: line.len(), expected: columns })
				}
				cells.extend_from_slice(line.as_bytes());
				rows += 1;
			}

			Ok(Schematic { cells, rows, columns })
		}
	}

	#[test]
	fn tests() {
		assert!(matches!("".parse::<Schematic>(), Err(SchematicError::Empty)));
		assert!(matches!("467..\n...*\n".parse::<Schematic>(),
			Err(SchematicError::Width { line: 2, found: 4, expected: 5 })));

		let schematic: Schematic = super::tests::INPUT.parse().unwrap();
		assert_eq!((schematic.rows, schematic.columns), (10, 10));
	}
}


#[cfg(test)]
mod tests {
	use indoc::indoc;
	use super::*;


	pub(super) const INPUT: &str = indoc! { "
		467..114..
		...*......
		..35..633.
		......#...
		617*......
		.....+.58.
		..592.....
		......755.
		...$.*....
		.664.598..
	" };

	#[test]
	fn tests() {
		let schematic = input_schematic_from_str(INPUT);
		assert_eq!(part1_impl(&schematic), 4361);
		// Scanning mutates nothing, so a second pass finds the same sum
		assert_eq!(part1_impl(&schematic), 4361);

		// Corner symbols never reach outside the grid
		assert_eq!(part1_impl(&input_schematic_from_str("*5.\n...\n.9*")), 14);

		// A number flanked by two symbols counts once
		assert_eq!(part1_impl(&input_schematic_from_str("*12*")), 12);

		// A number spanning the full width counts once, in full
		assert_eq!(part1_impl(&input_schematic_from_str("1234\n*...")), 1234);

		assert_eq!(part1(), 4361);
	}
}
