//! Case-insensitive substring search shared by every list screen.

/// Exposes the text fields a free-text query is matched against.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

/// True when any searched field contains `query`, ignoring case.
/// An empty query matches everything.
pub fn matches_query<T: Searchable + ?Sized>(record: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();
    record
        .search_fields()
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Keeps the matching records in their original order.
pub fn filter_records<T: Searchable>(records: Vec<T>, query: &str) -> Vec<T> {
    records
        .into_iter()
        .filter(|record| matches_query(record, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Contact {
        name: &'static str,
        phone: &'static str,
    }

    impl Searchable for Contact {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name, self.phone]
        }
    }

    fn contacts() -> Vec<Contact> {
        vec![
            Contact { name: "Иванов Иван Иванович", phone: "+7 (999) 123-45-67" },
            Contact { name: "Петрова Анна Сергеевна", phone: "+7 (999) 234-56-78" },
            Contact { name: "Сидоров Петр Михайлович", phone: "+7 (999) 345-67-89" },
        ]
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        assert_eq!(filter_records(contacts(), ""), contacts());
    }

    #[test]
    fn matches_cyrillic_ignoring_case() {
        let found = filter_records(contacts(), "пЕТР");
        let names: Vec<_> = found.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Петрова Анна Сергеевна", "Сидоров Петр Михайлович"]);
    }

    #[test]
    fn any_field_can_match() {
        let found = filter_records(contacts(), "234-56");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Петрова Анна Сергеевна");
    }

    #[test]
    fn result_is_exactly_the_matching_subsequence() {
        for query in ["ов", "999", "Анна", "zzz", "-"] {
            let all = contacts();
            let kept = filter_records(all.clone(), query);

            let expected: Vec<_> = all.iter().filter(|c| matches_query(*c, query)).cloned().collect();
            assert_eq!(kept, expected);

            for excluded in all.iter().filter(|c| !kept.contains(*c)) {
                assert!(excluded
                    .search_fields()
                    .iter()
                    .all(|f| !f.to_lowercase().contains(&query.to_lowercase())));
            }
        }
    }
}
