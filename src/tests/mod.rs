mod formatter_tests;

use std::collections::HashMap;

use crate::CountryDirectory;

use region_code::RegionCode;

/// Fixed record order: it pins the tie break between countries sharing a
/// calling code (US before CA, RU before KZ).
pub(crate) const TEST_DATASET: &'static str = "\
1;US;XXX XXX XXXX
1;CA;XXX XXX XXXX
1876;JM;XXX XXXX
7;RU;XXX XXX XXXX
7;KZ;XXX XXX XX XX
44;GB;XXXX XXXXXX
33;FR;X XX XX XX XX
49;DE
code;XX;XXX
380;UA;XX XXX XXXX
375;BY;XX XXX XXXX
888;FT;XXXX XXXX
998;UZ;XX XXX XXXX
";

static ONCE: std::sync::Once = std::sync::Once::new();

fn test_region_names() -> HashMap<String, String> {
    [
        (RegionCode::us(), "United States"),
        (RegionCode::ca(), "Canada"),
        (RegionCode::jm(), "Jamaica"),
        (RegionCode::ru(), "Russia"),
        (RegionCode::kz(), "Kazakhstan"),
        (RegionCode::gb(), "United Kingdom"),
        (RegionCode::fr(), "France"),
        (RegionCode::de(), "Germany"),
        (RegionCode::ua(), "Ukraine"),
        (RegionCode::by(), "Belarus"),
        (RegionCode::ft(), "Anonymous Numbers"),
        (RegionCode::uz(), "Uzbekistan"),
    ]
    .into_iter()
    .map(|(id, name)| (id.to_owned(), name.to_owned()))
    .collect()
}

// This setup function builds the directory every test works against.
pub(crate) fn get_directory() -> CountryDirectory {
    ONCE.call_once(|| {
        let _ = colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .try_init();
    });
    CountryDirectory::from_dataset(TEST_DATASET, &test_region_names())
}
