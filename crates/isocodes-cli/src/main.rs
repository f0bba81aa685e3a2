//! isocodes: command-line interface for isocodes-core
//!
//! This binary looks up ISO reference data from your terminal: countries,
//! languages, currencies, country subdivisions, former countries and
//! scripts.
//!
//! Usage examples
//! --------------
//!
//! - Find a country by code (alpha-2 or alpha-3)
//!   $ isocodes countries --code US
//!
//! - Search countries by name, or match it exactly
//!   $ isocodes countries --name Island
//!   $ isocodes countries --name France --exact
//!
//! - Resolve a former name
//!   $ isocodes countries --former-name Burma
//!
//! - List the subdivisions of a country as CSV
//!   $ isocodes --format csv subdivisions --country CH
//!
//! Data source
//! -----------
//!
//! By default the datasets bundled into `isocodes-core` are used. Point
//! `--data-dir <DIR>` at a directory of `iso_<key>.json` (or `.json.gz`)
//! files to use another iso-codes release. Set `RUST_LOG=debug` to see
//! dataset loads.
mod args;
mod output;

use crate::args::{
    CliArgs, Commands, CountryQuery, CurrencyQuery, FormerCountryQuery, LanguageQuery,
    ScriptQuery, SubdivisionQuery,
};
use crate::output::render;
use clap::Parser;
use isocodes_core::{
    Countries, Currencies, DataSource, Dataset, FormerCountries, IsoSearch, Languages, Record,
    Scripts, Subdivisions,
};
use log::debug;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = CliArgs::parse();

    let source = args
        .data_dir
        .clone()
        .map(DataSource::Directory)
        .unwrap_or_default();
    debug!("Using data source {source:?}");
    let fields = args.fields.as_deref();

    let output = match &args.command {
        Commands::Countries { query, exact } => {
            let countries = Countries::load(&source)?;
            let results = countries_query(&countries, query, *exact);
            render(&limit(results, args.limit), args.format, fields)?
        }
        Commands::Languages { query, exact } => {
            let languages = Languages::load(&source)?;
            let results = languages_query(&languages, query, *exact);
            render(&limit(results, args.limit), args.format, fields)?
        }
        Commands::Currencies { query, exact } => {
            let currencies = Currencies::load(&source)?;
            let results = currencies_query(&currencies, query, *exact);
            render(&limit(results, args.limit), args.format, fields)?
        }
        Commands::Subdivisions { query, exact } => {
            let subdivisions = Subdivisions::load(&source)?;
            let results = subdivisions_query(&subdivisions, query, *exact);
            render(&limit(results, args.limit), args.format, fields)?
        }
        Commands::FormerCountries { query, exact } => {
            let former = FormerCountries::load(&source)?;
            let results = former_countries_query(&former, query, *exact);
            render(&limit(results, args.limit), args.format, fields)?
        }
        Commands::Scripts { query, exact } => {
            let scripts = Scripts::load(&source)?;
            let results = scripts_query(&scripts, query, *exact);
            render(&limit(results, args.limit), args.format, fields)?
        }
    };

    println!("{output}");
    Ok(())
}

fn limit(mut results: Vec<&Record>, limit: Option<usize>) -> Vec<&Record> {
    // 0 means no limit.
    if let Some(n) = limit.filter(|&n| n > 0) {
        results.truncate(n);
    }
    results
}

/// First exact hit for `value`, trying `fields` in order.
fn find_first<'a>(ds: &'a Dataset, fields: &[&str], value: &str) -> Vec<&'a Record> {
    fields
        .iter()
        .find_map(|f| ds.find(f, value))
        .into_iter()
        .collect()
}

fn by_name<'a>(ds: &'a Dataset, name: &str, exact: bool) -> Vec<&'a Record> {
    if exact {
        ds.find("name", name).into_iter().collect()
    } else {
        ds.search(&[("name", name)])
    }
}

fn all(ds: &Dataset) -> Vec<&Record> {
    ds.iter().collect()
}

/// `latn` -> `Latn`, the ISO 15924 spelling.
fn title_case(s: &str) -> String {
    let mut chars = s.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn countries_query<'a>(countries: &'a Countries, q: &CountryQuery, exact: bool) -> Vec<&'a Record> {
    if let Some(code) = &q.code {
        find_first(countries, &["alpha_2", "alpha_3"], &code.trim().to_uppercase())
    } else if let Some(name) = &q.name {
        by_name(countries, name, exact)
    } else if let Some(numeric) = &q.numeric {
        find_first(countries, &["numeric"], numeric.trim())
    } else if let Some(former) = &q.former_name {
        countries.get_by_former_name(former).into_iter().collect()
    } else if q.list_all {
        all(countries)
    } else {
        Vec::new()
    }
}

fn languages_query<'a>(languages: &'a Languages, q: &LanguageQuery, exact: bool) -> Vec<&'a Record> {
    if let Some(code) = &q.code {
        find_first(
            languages,
            &["alpha_2", "alpha_3", "bibliographic"],
            &code.trim().to_lowercase(),
        )
    } else if let Some(name) = &q.name {
        by_name(languages, name, exact)
    } else if q.list_all {
        all(languages)
    } else {
        Vec::new()
    }
}

fn currencies_query<'a>(currencies: &'a Currencies, q: &CurrencyQuery, exact: bool) -> Vec<&'a Record> {
    if let Some(code) = &q.code {
        find_first(currencies, &["alpha_3"], &code.trim().to_uppercase())
    } else if let Some(name) = &q.name {
        by_name(currencies, name, exact)
    } else if let Some(numeric) = &q.numeric {
        find_first(currencies, &["numeric"], numeric.trim())
    } else if q.list_all {
        all(currencies)
    } else {
        Vec::new()
    }
}

fn subdivisions_query<'a>(
    subdivisions: &'a Subdivisions,
    q: &SubdivisionQuery,
    exact: bool,
) -> Vec<&'a Record> {
    if let Some(code) = &q.code {
        find_first(subdivisions, &["code"], &code.trim().to_uppercase())
    } else if let Some(name) = &q.name {
        by_name(subdivisions, name, exact)
    } else if let Some(country) = &q.country {
        subdivisions.for_country(country)
    } else if q.list_all {
        all(subdivisions)
    } else {
        Vec::new()
    }
}

fn former_countries_query<'a>(
    former: &'a FormerCountries,
    q: &FormerCountryQuery,
    exact: bool,
) -> Vec<&'a Record> {
    if let Some(code) = &q.code {
        find_first(
            former,
            &["alpha_2", "alpha_3", "alpha_4"],
            &code.trim().to_uppercase(),
        )
    } else if let Some(name) = &q.name {
        by_name(former, name, exact)
    } else if q.list_all {
        all(former)
    } else {
        Vec::new()
    }
}

fn scripts_query<'a>(scripts: &'a Scripts, q: &ScriptQuery, exact: bool) -> Vec<&'a Record> {
    if let Some(code) = &q.code {
        find_first(scripts, &["alpha_4"], &title_case(code))
    } else if let Some(name) = &q.name {
        by_name(scripts, name, exact)
    } else if let Some(numeric) = &q.numeric {
        find_first(scripts, &["numeric"], numeric.trim())
    } else if q.list_all {
        all(scripts)
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_limit_keeps_everything() {
        let recs: Vec<Record> = ["A", "B", "C"]
            .into_iter()
            .map(|c| [("code", c)].into_iter().collect())
            .collect();
        let refs: Vec<&Record> = recs.iter().collect();
        assert_eq!(limit(refs.clone(), Some(0)).len(), 3);
        assert_eq!(limit(refs.clone(), None).len(), 3);
        assert_eq!(limit(refs, Some(2)).len(), 2);
    }

    #[test]
    fn title_case_matches_iso_15924() {
        assert_eq!(title_case("latn"), "Latn");
        assert_eq!(title_case("CYRL"), "Cyrl");
        assert_eq!(title_case(""), "");
    }
}
