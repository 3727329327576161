// Copyright (c) 2023 Bastiaan Marinus van de Weerd


macro_rules! days {
	( $( $num:literal ),+ $( , )? ) => { paste::paste! {
		$( mod [<day $num>]; )+

		fn main() {
			$( println!("Day {}, part 1: {}", $num, [<day $num>]::part1()); )+
		}
	} }
}

days!(02, 03);
