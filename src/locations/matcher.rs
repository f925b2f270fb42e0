use super::Location;

/// Return the locations whose combined fields contain `query`, ignoring case.
///
/// A blank query matches everything. Order follows `locations`.
pub fn filter<'a>(query: &str, locations: &'a [Location]) -> Vec<&'a Location> {
	if query.trim().is_empty() {
		return locations.iter().collect();
	}

	let needle = query.to_lowercase();
	locations
		.iter()
		.filter(|location| location.haystack().to_lowercase().contains(&needle))
		.collect()
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;
	use crate::locations::LocationCatalog;

	fn sample() -> Vec<Location> {
		vec![
			Location::new("HAN", "Ha Noi", "Northern Vietnam"),
			Location::new("DAD", "Da Nang", "Central Vietnam"),
			Location::new("SGN", "Ho Chi Minh City", "Southern Vietnam"),
		]
	}

	#[test]
	fn empty_query_returns_everything_in_order() {
		let locations = sample();
		let matches = filter("", &locations);
		let codes: Vec<_> = matches.iter().map(|l| l.short_code.as_str()).collect();
		assert_eq!(codes, ["HAN", "DAD", "SGN"]);
	}

	#[test]
	fn whitespace_query_is_treated_as_empty() {
		let locations = sample();
		assert_eq!(filter("   ", &locations).len(), 3);
	}

	#[test]
	fn matches_any_field_case_insensitively() {
		let locations = sample();
		let by_code: Vec<_> = filter("sgn", &locations)
			.into_iter()
			.map(|l| l.display_name.as_str())
			.collect();
		assert_eq!(by_code, ["Ho Chi Minh City"]);

		let by_region = filter("VIETNAM", &locations);
		assert_eq!(by_region.len(), 3);

		let by_name = filter("da n", &locations);
		assert_eq!(by_name[0].short_code, "DAD");
	}

	#[test]
	fn no_match_yields_empty_list() {
		let locations = sample();
		assert!(filter("Bangkok", &locations).is_empty());
	}

	proptest! {
		#[test]
		fn results_always_contain_the_query(query in "[a-zA-Z ]{0,6}") {
			let catalog = LocationCatalog::builtin();
			let matches = filter(&query, catalog.locations());
			if query.trim().is_empty() {
				prop_assert_eq!(matches.len(), catalog.len());
			} else {
				let needle = query.to_lowercase();
				for location in &matches {
					prop_assert!(location.haystack().to_lowercase().contains(&needle));
				}
				let expected = catalog
					.locations()
					.iter()
					.filter(|l| l.haystack().to_lowercase().contains(&needle))
					.count();
				prop_assert_eq!(matches.len(), expected);
			}
		}
	}
}
