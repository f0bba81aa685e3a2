use isocodes_core::prelude::*;

#[test]
fn swaziland_resolves_to_eswatini() {
    let hit = countries().unwrap().get_by_former_name("Swaziland").unwrap();
    assert_eq!(hit.alpha_2(), Some("SZ"));
    assert_eq!(hit.alpha_3(), Some("SWZ"));
    assert_eq!(hit.name(), Some("Eswatini"));
}

#[test]
fn withdrawn_names_resolve_through_code_changes() {
    let c = countries().unwrap();

    let burma = c.get_by_former_name("Burma").unwrap();
    assert_eq!(burma.alpha_2(), Some("MM"));
    assert_eq!(burma.alpha_3(), Some("MMR"));
    assert_eq!(burma.name(), Some("Myanmar"));

    let zaire = c.get_by_former_name("Zaire").unwrap();
    assert_eq!(zaire.alpha_2(), Some("CD"));
    assert_eq!(zaire.alpha_3(), Some("COD"));

    assert_eq!(
        c.get_by_former_name("East Timor").and_then(Record::alpha_2),
        Some("TL")
    );
    assert_eq!(
        c.get_by_former_name("Upper Volta").and_then(Record::alpha_2),
        Some("BF")
    );
}

#[test]
fn unknown_empty_and_dissolved_names_are_absent() {
    let c = countries().unwrap();
    assert!(c.get_by_former_name("Atlantis").is_none());
    assert!(c.get_by_former_name("").is_none());
    assert!(c.get_by_former_name("   ").is_none());
    assert!(c.get_by_former_name("USSR").is_none());
    assert!(c.get_by_former_name("Yugoslavia").is_none());
    assert!(c.get_by_former_name("German Democratic Republic").is_none());
}

#[test]
fn lookup_is_case_sensitive() {
    let c = countries().unwrap();
    assert!(c.get_by_former_name("swaziland").is_none());
    assert!(c.get_by_former_name("SWAZILAND").is_none());
    assert!(c.get_by_former_name("burma").is_none());
    assert!(c.get_by_former_name("Swaziland").is_some());
}

#[test]
fn partial_rename_names_do_not_match() {
    assert!(countries().unwrap().get_by_former_name("Swazi").is_none());
}

#[test]
fn info_for_a_rename() {
    let info = countries()
        .unwrap()
        .get_former_names_info("Swaziland")
        .unwrap();
    assert_eq!(info.alpha_2, "SZ");
    assert_eq!(info.alpha_3, "SWZ");
    assert_eq!(info.current_name.as_deref(), Some("Eswatini"));
    assert_eq!(info.change_date, "2018-04-19");
    assert!(info.comment.unwrap().contains("Name change"));
}

#[test]
fn info_for_a_withdrawn_name() {
    let c = countries().unwrap();
    let info = c.get_former_names_info("Burma").unwrap();
    assert_eq!(info.alpha_2, "BU");
    assert_eq!(info.alpha_3, "BUR");
    assert_eq!(info.alpha_4.as_deref(), Some("BUMM"));
    assert_eq!(info.current_name.as_deref(), Some("Myanmar"));
    assert_eq!(info.current_alpha_2.as_deref(), Some("MM"));
    assert!(info.change_date.contains("1989"));

    let ussr = c.get_former_names_info("USSR").unwrap();
    assert_eq!(ussr.current_name, None);

    assert!(c.get_former_names_info("Atlantis").is_none());
    assert!(c.get_former_names_info("").is_none());
}

#[test]
fn former_names_list() {
    let names = countries().unwrap().former_names();
    assert!(names.iter().any(|n| n == "Swaziland"));
    assert!(names.iter().any(|n| n == "Burma"));
    assert!(names.iter().any(|n| n == "Zaire"));
    assert!(names.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn every_rename_keeps_its_codes() {
    let c = countries().unwrap();
    for (former, alpha_2, alpha_3) in [
        ("Turkey", "TR", "TUR"),
        ("Czech Republic", "CZ", "CZE"),
        ("Cape Verde", "CV", "CPV"),
        ("Macedonia", "MK", "MKD"),
    ] {
        let hit = c.get_by_former_name(former).unwrap();
        assert_eq!(hit.alpha_2(), Some(alpha_2), "{former}");
        assert_eq!(hit.alpha_3(), Some(alpha_3), "{former}");
    }
}

#[test]
fn byelorussian_ssr_resolves_to_belarus() {
    let c = countries().unwrap();
    let belarus = c.get_by_former_name("Byelorussian SSR").unwrap();
    assert_eq!(belarus.alpha_3(), Some("BLR"));
    assert_eq!(belarus.name(), Some("Belarus"));
}
