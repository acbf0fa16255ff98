use proptest::option;
use proptest::prelude::*;

use relocale_core::locale::LocaleId;

fn list_form(lang: &str, region: &Option<String>) -> String {
    match region {
        Some(region) => format!("{lang}-{region}"),
        None => lang.to_string(),
    }
}

proptest! {
    #[test]
    fn list_form_round_trips(lang in "[a-z]{2,3}", region in option::of("[A-Z]{2}")) {
        // Regions only pair with two-letter languages.
        prop_assume!(region.is_none() || lang.len() == 2);
        let raw = list_form(&lang, &region);

        let id = LocaleId::parse(&raw).expect("valid id");
        prop_assert_eq!(id.to_string(), raw);
    }

    #[test]
    fn res_dir_name_round_trips(lang in "[a-z]{2,3}", region in option::of("[A-Z]{2}")) {
        prop_assume!(region.is_none() || lang.len() == 2);
        let raw = list_form(&lang, &region);

        let id = LocaleId::parse(&raw).expect("valid id");
        let dir = id.res_dir_name();
        prop_assert!(dir.starts_with("values-"));

        let back = LocaleId::from_res_dir(&dir).expect("dir maps back to a locale");
        prop_assert_eq!(back, id);
    }

    #[test]
    fn three_letter_language_with_region_never_parses(
        lang in "[a-z]{3}",
        region in "[A-Z]{2}",
    ) {
        let tag = format!("{lang}-{region}");
        prop_assert!(LocaleId::parse(&tag).is_err());
        let dir = format!("values-{lang}-r{region}");
        prop_assert_eq!(LocaleId::from_res_dir(&dir), None);
    }

    #[test]
    fn qualifier_dirs_never_parse(
        suffix in "(sw[0-9]{3}dp|v[0-9]{2}|night|land|port|ldrtl)",
    ) {
        prop_assert_eq!(LocaleId::from_res_dir(&format!("values-{suffix}")), None);
    }
}
