// crates/isocodes-core/src/model/search.rs
use super::{Dataset, Record};
use crate::common::SearchHit;
use crate::text::{contains_ignore_case, fold_key};
use crate::traits::IsoSearch;

const CODE_FIELDS: [&str; 5] = ["alpha_2", "alpha_3", "alpha_4", "code", "numeric"];
const NAME_FIELDS: [&str; 4] = ["name", "official_name", "common_name", "inverted_name"];

impl IsoSearch for Dataset {
    fn find(&self, field: &str, value: &str) -> Option<&Record> {
        let pos = self.index(field)?.get(value)?;
        self.at(pos)
    }

    fn search(&self, criteria: &[(&str, &str)]) -> Vec<&Record> {
        // An empty value is malformed input, not a wildcard.
        if criteria.is_empty() || criteria.iter().any(|(_, v)| v.is_empty()) {
            return Vec::new();
        }
        self.iter()
            .filter(|r| {
                criteria.iter().all(|(field, value)| {
                    r.get(field)
                        .is_some_and(|have| contains_ignore_case(have, value))
                })
            })
            .collect()
    }

    fn get(&self, criteria: &[(&str, &str)]) -> &Record {
        let Some((field, value)) = criteria.first() else {
            return Record::empty();
        };
        if value.is_empty() {
            return Record::empty();
        }
        self.iter()
            .find(|r| r.get(field).is_some_and(|have| have.contains(value)))
            .unwrap_or(Record::empty())
    }

    fn smart_search(&self, query: &str) -> Vec<SearchHit<'_>> {
        let q_raw = query.trim();
        if q_raw.is_empty() {
            return Vec::new();
        }
        let q = fold_key(q_raw);

        let mut out: Vec<SearchHit<'_>> = self
            .iter()
            .filter_map(|record| {
                let score = score_record(record, q_raw, &q);
                (score > 0).then_some(SearchHit { score, record })
            })
            .collect();

        // Stable: equal scores keep dataset order.
        out.sort_by(|a, b| b.score.cmp(&a.score));
        out
    }
}

fn score_record(record: &Record, q_raw: &str, q: &str) -> u8 {
    let code_hit = CODE_FIELDS
        .iter()
        .filter_map(|f| record.get(f))
        .any(|code| code.eq_ignore_ascii_case(q_raw));
    if code_hit {
        return 100;
    }

    NAME_FIELDS
        .iter()
        .filter_map(|f| record.get(f))
        .map(|name| {
            let folded = fold_key(name);
            if folded == q {
                90
            } else if folded.starts_with(q) {
                80
            } else if folded.contains(q) {
                70
            } else {
                0
            }
        })
        .max()
        .unwrap_or(0)
}
