//! Extraction recipes keyed by destination index
//!
//! Destinations without an entry here use the default direct strategy,
//! which matches admin_0 rows on the record's ISO A3 code.

use crate::boundary::Side;
use crate::geometry::BoundingBox;

use super::{Sector, Strategy};

/// Look up the extraction recipe for a destination index
pub(super) fn strategy_for(index: u16) -> Strategy {
    match index {
        // 1 - Austral Islands: extracted from French Polynesia by bbox
        1 => Strategy::IslandBbox {
            country: "PYF",
            province: None,
            bbox: BoundingBox::new(-155.0, -28.0, -144.0, -20.0),
        },
        // 2 - Australia: mainland minus Tasmania
        2 => Strategy::Remainder {
            country: "AUS",
            subtract_provinces: &["Tasmania"],
            subtract_disputed: &[],
            merge_disputed: &[],
        },
        // 3 - Chatham Islands: extracted from New Zealand by bbox
        3 => Strategy::IslandBbox {
            country: "NZL",
            province: None,
            bbox: BoundingBox::new(-177.5, -45.0, -175.0, -43.0),
        },
        // 5 - Easter Island: extracted from Chile by bbox
        5 => Strategy::IslandBbox {
            country: "CHL",
            province: None,
            bbox: BoundingBox::new(-110.0, -28.0, -108.0, -26.0),
        },
        // 7 - French Polynesia: PYF minus Austral and Marquesas
        7 => Strategy::GroupRemainder {
            country: "PYF",
            subtract: &[1, 15],
        },
        // 8 - Galapagos Islands: province of Ecuador
        8 => Strategy::Admin1 {
            country: "ECU",
            provinces: &["Galápagos"],
        },
        // 10 - Hawaiian Islands: state of the USA
        10 => Strategy::Admin1 {
            country: "USA",
            provinces: &["Hawaii"],
        },
        // 11 - Juan Fernandez Islands: extracted from Chile by bbox
        11 => Strategy::IslandBbox {
            country: "CHL",
            province: None,
            bbox: BoundingBox::new(-81.0, -35.0, -78.0, -32.0),
        },
        // 12 - Kiribati: KIR minus Line/Phoenix Islands
        12 => Strategy::GroupRemainder {
            country: "KIR",
            subtract: &[13],
        },
        // 13 - Line/Phoenix Islands: extracted from Kiribati by bbox
        13 => Strategy::IslandBbox {
            country: "KIR",
            province: None,
            bbox: BoundingBox::new(-175.0, -15.0, -148.0, 7.0),
        },
        // 14 - Lord Howe Island: extracted from Australia by bbox
        14 => Strategy::IslandBbox {
            country: "AUS",
            province: None,
            bbox: BoundingBox::new(158.0, -32.5, 160.0, -31.0),
        },
        // 15 - Marquesas Islands: extracted from French Polynesia by bbox
        15 => Strategy::IslandBbox {
            country: "PYF",
            province: None,
            bbox: BoundingBox::new(-141.0, -12.0, -138.0, -7.0),
        },
        // 18 - Midway Island: own subunit in Natural Earth
        18 => Strategy::Subunit {
            code: "MQI",
            narrow: None,
        },
        // 21 - New Zealand: NZL minus Chatham Islands
        21 => Strategy::GroupRemainder {
            country: "NZL",
            subtract: &[3],
        },
        // 25 - Ogasawara: extracted from Japan by bbox
        25 => Strategy::IslandBbox {
            country: "JPN",
            province: None,
            bbox: BoundingBox::new(141.0, 24.0, 143.0, 28.0),
        },
        // 27 - Papua New Guinea: PNG minus the Islands Region
        27 => Strategy::GroupRemainder {
            country: "PNG",
            subtract: &[28],
        },
        // 28 - PNG Islands Region: extracted from PNG by bbox
        28 => Strategy::IslandBbox {
            country: "PNG",
            province: None,
            bbox: BoundingBox::new(147.0, -8.0, 160.0, -1.0),
        },
        // 30 - Ryukyu Islands: Okinawa prefecture
        30 => Strategy::Admin1 {
            country: "JPN",
            provinces: &["Okinawa"],
        },
        // 34 - Tasmania: state of Australia
        34 => Strategy::Admin1 {
            country: "AUS",
            provinces: &["Tasmania"],
        },
        // 39 - Wake Island: own subunit in Natural Earth
        39 => Strategy::Subunit {
            code: "WQI",
            narrow: None,
        },
        // 41 - Alaska: state of the USA
        41 => Strategy::Admin1 {
            country: "USA",
            provinces: &["Alaska"],
        },
        // 42 - Canada: CAN minus Prince Edward Island
        42 => Strategy::Remainder {
            country: "CAN",
            subtract_provinces: &["Prince Edward Island"],
            subtract_disputed: &[],
            merge_disputed: &[],
        },
        // 44 - Prince Edward Island: province of Canada
        44 => Strategy::Admin1 {
            country: "CAN",
            provinces: &["Prince Edward Island"],
        },
        // 46 - United States (Contiguous): USA minus Alaska and Hawaii
        46 => Strategy::Remainder {
            country: "USA",
            subtract_provinces: &["Alaska", "Hawaii"],
            subtract_disputed: &[],
            merge_disputed: &[],
        },
        // 56 - Brazil: BRA minus Fernando de Noronha
        56 => Strategy::GroupRemainder {
            country: "BRA",
            subtract: &[106],
        },
        // 57 - Chile: CHL minus Easter Island and Juan Fernandez
        57 => Strategy::GroupRemainder {
            country: "CHL",
            subtract: &[5, 11],
        },
        // 58 - Colombia: COL minus San Andres & Providencia
        58 => Strategy::Remainder {
            country: "COL",
            subtract_provinces: &["San Andrés y Providencia"],
            subtract_disputed: &[],
            merge_disputed: &[],
        },
        // 59 - Ecuador: ECU minus Galapagos
        59 => Strategy::Remainder {
            country: "ECU",
            subtract_provinces: &["Galápagos"],
            subtract_disputed: &[],
            merge_disputed: &[],
        },
        // 62 - Nueva Esparta: state of Venezuela
        62 => Strategy::Admin1 {
            country: "VEN",
            provinces: &["Nueva Esparta"],
        },
        // 67 - Venezuela: VEN minus Nueva Esparta
        67 => Strategy::Remainder {
            country: "VEN",
            subtract_provinces: &["Nueva Esparta"],
            subtract_disputed: &[],
            merge_disputed: &[],
        },
        // 73 - Bonaire: special municipality of the Netherlands
        73 => Strategy::Admin1 {
            country: "NLD",
            provinces: &["Bonaire"],
        },
        // 85 - Nevis: extracted from St. Kitts and Nevis by bbox
        85 => Strategy::IslandBbox {
            country: "KNA",
            province: None,
            bbox: BoundingBox::new(-62.7, 17.05, -62.4, 17.25),
        },
        // 87 - Saba & Sint Eustatius: special municipalities
        87 => Strategy::Admin1 {
            country: "NLD",
            provinces: &["Saba", "St. Eustatius"],
        },
        // 89 - St. Kitts: extracted from St. Kitts and Nevis by bbox
        89 => Strategy::IslandBbox {
            country: "KNA",
            province: None,
            bbox: BoundingBox::new(-62.9, 17.2, -62.5, 17.45),
        },
        // 93 - San Andres & Providencia: department of Colombia
        93 => Strategy::Admin1 {
            country: "COL",
            provinces: &["San Andrés y Providencia"],
        },
        // 99 - Ascension: extracted from St. Helena by bbox
        99 => Strategy::IslandBbox {
            country: "SHN",
            province: None,
            bbox: BoundingBox::new(-15.0, -8.5, -14.0, -7.0),
        },
        // 100 - Azores Islands: autonomous region of Portugal
        100 => Strategy::Admin1 {
            country: "PRT",
            provinces: &["Azores"],
        },
        // 102 - Canary Islands: two Spanish provinces
        102 => Strategy::Admin1 {
            country: "ESP",
            provinces: &["Las Palmas", "Santa Cruz de Tenerife"],
        },
        // 106 - Fernando de Noronha: extracted from Brazil by bbox
        106 => Strategy::IslandBbox {
            country: "BRA",
            province: None,
            bbox: BoundingBox::new(-33.0, -4.5, -32.0, -3.0),
        },
        // 109 - Madeira: autonomous region of Portugal
        109 => Strategy::Admin1 {
            country: "PRT",
            provinces: &["Madeira"],
        },
        // 111 - St. Helena: extracted from SHN by bbox
        111 => Strategy::IslandBbox {
            country: "SHN",
            province: None,
            bbox: BoundingBox::new(-6.5, -16.5, -5.0, -15.0),
        },
        // 112 - Tristan da Cunha: extracted from SHN by bbox
        112 => Strategy::IslandBbox {
            country: "SHN",
            province: None,
            bbox: BoundingBox::new(-13.0, -38.0, -12.0, -36.5),
        },
        // 113 - Aland Islands: separate entity in Natural Earth
        113 => Strategy::Direct {
            code: Some("ALD"),
            merge: &[],
        },
        // 117 - Balearic Islands: province of Spain
        117 => Strategy::Admin1 {
            country: "ESP",
            provinces: &["Baleares"],
        },
        // 120 - Bosnia & Herzegovina: BIH minus Srpska
        120 => Strategy::GroupRemainder {
            country: "BIH",
            subtract: &[173],
        },
        // 122 - Corsica: own subunit in Natural Earth
        122 => Strategy::Subunit {
            code: "FXC",
            narrow: None,
        },
        // 123 - Crete: region of Greece
        123 => Strategy::Admin1 {
            country: "GRC",
            provinces: &["Kriti"],
        },
        // 125 - Cyprus British Sovereign Base Areas
        125 => Strategy::Direct {
            code: Some("WSB"),
            merge: &[],
        },
        // 126 - Cyprus Republic: CYP minus the northern disputed area
        126 => Strategy::DisputedRemainder {
            country: "CYP",
            subtract: &["N. Cyprus"],
        },
        // 127 - Cyprus Turkish Fed. State: from the disputed layer
        127 => Strategy::Disputed {
            query: "N. Cyprus",
            merge: &[],
        },
        // 130 - England: own subunit in Natural Earth
        130 => Strategy::Subunit {
            code: "ENG",
            narrow: None,
        },
        // 133 - France: metropolitan subunit, excluding Corsica
        133 => Strategy::Subunit {
            code: "FXM",
            narrow: None,
        },
        // 136 - Greece: GRC minus Crete, Ionian and Aegean islands
        136 => Strategy::Remainder {
            country: "GRC",
            subtract_provinces: &["Kriti", "Ionioi Nisoi", "Voreio Aigaio", "Notio Aigaio"],
            subtract_disputed: &[],
            merge_disputed: &[],
        },
        // 137 - Greek Aegean Islands: two regions merged
        137 => Strategy::Admin1 {
            country: "GRC",
            provinces: &["Voreio Aigaio", "Notio Aigaio"],
        },
        // 140 - Ionian Islands: region of Greece
        140 => Strategy::Admin1 {
            country: "GRC",
            provinces: &["Ionioi Nisoi"],
        },
        // 142 - Ireland Northern: own subunit in Natural Earth
        142 => Strategy::Subunit {
            code: "NIR",
            narrow: None,
        },
        // 144 - Italy: ITA minus the Sardinia and Sicily provinces
        144 => Strategy::Remainder {
            country: "ITA",
            subtract_provinces: &[
                "Cagliari",
                "Carbonia-Iglesias",
                "Medio Campidano",
                "Nuoro",
                "Ogliastra",
                "Olbia-Tempio",
                "Oristrano",
                "Sassari",
                "Agrigento",
                "Caltanissetta",
                "Catania",
                "Enna",
                "Messina",
                "Palermo",
                "Ragusa",
                "Siracusa",
                "Trapani",
            ],
            subtract_disputed: &[],
            merge_disputed: &[],
        },
        // 146 - Kaliningrad: oblast of Russia
        146 => Strategy::Admin1 {
            country: "RUS",
            provinces: &["Kaliningrad"],
        },
        // 147 - Kosovo: KOS in Natural Earth
        147 => Strategy::Direct {
            code: Some("KOS"),
            merge: &[],
        },
        // 148 - Lampedusa: extracted from the Agrigento province by bbox
        148 => Strategy::IslandBbox {
            country: "ITA",
            province: Some("Agrigento"),
            bbox: BoundingBox::new(12.0, 35.0, 13.0, 36.0),
        },
        // 154 - Moldova: MDA minus Transnistria
        154 => Strategy::DisputedRemainder {
            country: "MDA",
            subtract: &["Transnistria"],
        },
        // 161 - Portugal: PRT minus Madeira and the Azores
        161 => Strategy::Remainder {
            country: "PRT",
            subtract_provinces: &["Madeira", "Azores"],
            subtract_disputed: &[],
            merge_disputed: &[],
        },
        // 163 - Russia (European part): boundary clip, minus Kaliningrad
        // and Crimea, absorbing Caucasus ridge slivers
        163 => Strategy::Clip {
            country: "RUS",
            side: Side::West,
            absorb: Some((30.0, 59.0)),
            subtract: &[146],
            subtract_codes: &["RUC"],
        },
        // 165 - Sardinia: merge of its provinces
        165 => Strategy::Admin1 {
            country: "ITA",
            provinces: &[
                "Cagliari",
                "Carbonia-Iglesias",
                "Medio Campidano",
                "Nuoro",
                "Ogliastra",
                "Olbia-Tempio",
                "Oristrano",
                "Sassari",
            ],
        },
        // 166 - Scotland: own subunit in Natural Earth
        166 => Strategy::Subunit {
            code: "SCT",
            narrow: None,
        },
        // 168 - Sicily: merge of its provinces
        168 => Strategy::Admin1 {
            country: "ITA",
            provinces: &[
                "Agrigento",
                "Caltanissetta",
                "Catania",
                "Enna",
                "Messina",
                "Palermo",
                "Ragusa",
                "Siracusa",
                "Trapani",
            ],
        },
        // 171 - Spain: ESP minus Balearics, Canaries, Ceuta and Melilla
        171 => Strategy::Remainder {
            country: "ESP",
            subtract_provinces: &[
                "Baleares",
                "Las Palmas",
                "Santa Cruz de Tenerife",
                "Ceuta",
                "Melilla",
            ],
            subtract_disputed: &[],
            merge_disputed: &[],
        },
        // 172 - Spitsbergen (Svalbard): own unit in Natural Earth
        172 => Strategy::Direct {
            code: Some("SJM"),
            merge: &[],
        },
        // 173 - Srpska: own subunit in Natural Earth
        173 => Strategy::Subunit {
            code: "BIS",
            narrow: None,
        },
        // 176 - Transnistria: from the disputed layer
        176 => Strategy::Disputed {
            query: "Transnistria",
            merge: &[],
        },
        // 177 - Turkey in Europe: boundary clip
        177 => Strategy::Clip {
            country: "TUR",
            side: Side::West,
            absorb: None,
            subtract: &[],
            subtract_codes: &[],
        },
        // 178 - Ukraine: UKR plus the Crimea subunit
        178 => Strategy::Direct {
            code: Some("UKR"),
            merge: &["RUC"],
        },
        // 180 - Wales: own subunit in Natural Earth
        180 => Strategy::Subunit {
            code: "WLS",
            narrow: None,
        },
        // 181 - Argentine Antarctica
        181 => Strategy::Antarctic {
            sectors: &[Sector {
                west: -53.0,
                east: -25.0,
            }],
            north: -60.0,
        },
        // 182 - Australian Antarctic Territory: two sectors around Adelie Land
        182 => Strategy::Antarctic {
            sectors: &[
                Sector {
                    west: 44.63,
                    east: 136.0,
                },
                Sector {
                    west: 142.0,
                    east: 160.0,
                },
            ],
            north: -60.0,
        },
        // 183 - British Antarctic Territory
        183 => Strategy::Antarctic {
            sectors: &[Sector {
                west: -25.0,
                east: -20.0,
            }],
            north: -60.0,
        },
        // 184 - Chilean Antarctic Territory
        184 => Strategy::Antarctic {
            sectors: &[Sector {
                west: -90.0,
                east: -53.0,
            }],
            north: -60.0,
        },
        // 185 - French Antarctica (Adelie Land)
        185 => Strategy::Antarctic {
            sectors: &[Sector {
                west: 136.0,
                east: 142.0,
            }],
            north: -60.0,
        },
        // 186 - Ross Dependency: crosses the antimeridian
        186 => Strategy::Antarctic {
            sectors: &[Sector {
                west: 160.0,
                east: -150.0,
            }],
            north: -60.0,
        },
        // 187 - Norwegian Dependencies (Queen Maud Land)
        187 => Strategy::Antarctic {
            sectors: &[Sector {
                west: -20.0,
                east: 44.63,
            }],
            north: -60.0,
        },
        // 189 - Angola: AGO minus Cabinda
        189 => Strategy::Remainder {
            country: "AGO",
            subtract_provinces: &["Cabinda"],
            subtract_disputed: &[],
            merge_disputed: &[],
        },
        // 194 - Cabinda: exclave province of Angola
        194 => Strategy::Admin1 {
            country: "AGO",
            provinces: &["Cabinda"],
        },
        // 202 - Egypt in Africa: EGY minus the Sinai governorates,
        // plus Bir Tawil
        202 => Strategy::Remainder {
            country: "EGY",
            subtract_provinces: &["North Sinai", "South Sinai"],
            subtract_disputed: &[],
            merge_disputed: &["Bir Tawil"],
        },
        // 203 - Equatorial Guinea Bioko
        203 => Strategy::Admin1 {
            country: "GNQ",
            provinces: &["Bioko Norte", "Bioko Sur"],
        },
        // 204 - Equatorial Guinea Rio Muni (mainland)
        204 => Strategy::Admin1 {
            country: "GNQ",
            provinces: &["Centro Sur", "Kié-Ntem", "Litoral", "Wele-Nzas"],
        },
        // 221 - Morocco Spanish (Ceuta & Melilla)
        221 => Strategy::Admin1 {
            country: "ESP",
            provinces: &["Ceuta", "Melilla"],
        },
        // 230 - Somalia: SOM minus Somaliland
        230 => Strategy::DisputedRemainder {
            country: "SOM",
            subtract: &["Somaliland"],
        },
        // 231 - Somaliland: from the disputed layer
        231 => Strategy::Disputed {
            query: "Somaliland",
            merge: &[],
        },
        // 235 - Tanzania: TZA minus the Zanzibar regions
        235 => Strategy::Remainder {
            country: "TZA",
            subtract_provinces: &[
                "Zanzibar North",
                "Zanzibar South and Central",
                "Zanzibar West",
                "Zanzibar Urban/West",
            ],
            subtract_disputed: &[],
            merge_disputed: &[],
        },
        // 241 - Zanzibar: merge of its regions
        241 => Strategy::Admin1 {
            country: "TZA",
            provinces: &[
                "Zanzibar North",
                "Zanzibar South and Central",
                "Zanzibar West",
                "Zanzibar Urban/West",
            ],
        },
        // 243 - Abu Dhabi: emirate
        243 => Strategy::Admin1 {
            country: "ARE",
            provinces: &["Abu Dhabi"],
        },
        // 244 - Ajman: emirate
        244 => Strategy::Admin1 {
            country: "ARE",
            provinces: &["Ajman"],
        },
        // 246 - Dubai: emirate
        246 => Strategy::Admin1 {
            country: "ARE",
            provinces: &["Dubay"],
        },
        // 247 - Egypt in Asia: the Sinai governorates
        247 => Strategy::Admin1 {
            country: "EGY",
            provinces: &["North Sinai", "South Sinai"],
        },
        // 248 - Fujairah: emirate
        248 => Strategy::Admin1 {
            country: "ARE",
            provinces: &["Fujayrah"],
        },
        // 256 - Palestine: PSX in Natural Earth
        256 => Strategy::Direct {
            code: Some("PSX"),
            merge: &[],
        },
        // 258 - Ras Al Khaimah: emirate
        258 => Strategy::Admin1 {
            country: "ARE",
            provinces: &["Ras Al Khaymah"],
        },
        // 260 - Sharjah: emirate
        260 => Strategy::Admin1 {
            country: "ARE",
            provinces: &["Sharjah"],
        },
        // 262 - Umm Al Qaiwain: emirate
        262 => Strategy::Admin1 {
            country: "ARE",
            provinces: &["Umm Al Qaywayn"],
        },
        // 263 - Yemen: YEM minus Socotra
        263 => Strategy::GroupRemainder {
            country: "YEM",
            subtract: &[277],
        },
        // 264 - Andaman-Nicobar Islands: union territory of India
        264 => Strategy::Admin1 {
            country: "IND",
            provinces: &["Andaman and Nicobar"],
        },
        // 269 - Lakshadweep: union territory of India
        269 => Strategy::Admin1 {
            country: "IND",
            provinces: &["Lakshadweep"],
        },
        // 272 - Mauritius & Dependencies: MUS minus Rodrigues
        272 => Strategy::GroupRemainder {
            country: "MUS",
            subtract: &[275],
        },
        // 275 - Rodrigues Island: extracted from Mauritius by bbox
        275 => Strategy::IslandBbox {
            country: "MUS",
            province: None,
            bbox: BoundingBox::new(63.0, -20.5, 64.0, -19.0),
        },
        // 276 - Seychelles: SYC minus the outer islands
        276 => Strategy::GroupRemainder {
            country: "SYC",
            subtract: &[278],
        },
        // 277 - Socotra: extracted from Yemen by bbox
        277 => Strategy::IslandBbox {
            country: "YEM",
            province: None,
            bbox: BoundingBox::new(52.0, 11.0, 55.0, 13.0),
        },
        // 278 - Zil Elwannyen Sesel: outer Seychelles islands by bbox
        278 => Strategy::IslandBbox {
            country: "SYC",
            province: None,
            bbox: BoundingBox::new(52.0, -10.0, 57.0, -3.0),
        },
        // 279 - Abkhazia: from the disputed layer
        279 => Strategy::Disputed {
            query: "Abkhazia",
            merge: &[],
        },
        // 282 - Azerbaijan: AZE minus Nakhchivan
        282 => Strategy::Remainder {
            country: "AZE",
            subtract_provinces: &["Naxçıvan"],
            subtract_disputed: &[],
            merge_disputed: &[],
        },
        // 287 - China: CHN minus Hainan and Tibet
        287 => Strategy::Remainder {
            country: "CHN",
            subtract_provinces: &["Hainan", "Xizang"],
            subtract_disputed: &[],
            merge_disputed: &[],
        },
        // 288 - Georgia: GEO minus Abkhazia and South Ossetia
        288 => Strategy::DisputedRemainder {
            country: "GEO",
            subtract: &["Abkhazia", "South Ossetia"],
        },
        // 289 - Hainan Island: province of China
        289 => Strategy::Admin1 {
            country: "CHN",
            provinces: &["Hainan"],
        },
        // 291 - India: IND minus Sikkim, the island territories and Kashmir
        291 => Strategy::Remainder {
            country: "IND",
            subtract_provinces: &["Sikkim", "Andaman and Nicobar", "Lakshadweep"],
            subtract_disputed: &["Kashmir"],
            merge_disputed: &[],
        },
        // 292 - Java: merge of its provinces
        292 => Strategy::Admin1 {
            country: "IDN",
            provinces: &[
                "Jakarta Raya",
                "Banten",
                "Jawa Barat",
                "Jawa Tengah",
                "Jawa Timur",
                "Yogyakarta",
            ],
        },
        // 293 - Japan: JPN minus Okinawa (Ogasawara extracted separately)
        293 => Strategy::Remainder {
            country: "JPN",
            subtract_provinces: &["Okinawa"],
            subtract_disputed: &[],
            merge_disputed: &[],
        },
        // 294 - Jeju Island: province of South Korea
        294 => Strategy::Admin1 {
            country: "KOR",
            provinces: &["Jeju"],
        },
        // 295 - Kalimantan: merge of its provinces
        295 => Strategy::Admin1 {
            country: "IDN",
            provinces: &[
                "Kalimantan Barat",
                "Kalimantan Selatan",
                "Kalimantan Tengah",
                "Kalimantan Timur",
                "Kalimantan Utara",
            ],
        },
        // 296 - Kashmir: from the disputed layer, plus Siachen Glacier
        296 => Strategy::Disputed {
            query: "Kashmir",
            merge: &["Siachen Glacier"],
        },
        // 297 - Kazakhstan: KAZ plus the Baikonur lease area
        297 => Strategy::Direct {
            code: Some("KAZ"),
            merge: &["KAB"],
        },
        // 299 - Korea South: KOR minus Jeju
        299 => Strategy::Remainder {
            country: "KOR",
            subtract_provinces: &["Jeju"],
            subtract_disputed: &[],
            merge_disputed: &[],
        },
        // 302 - Lesser Sunda Islands: merge of its provinces
        302 => Strategy::Admin1 {
            country: "IDN",
            provinces: &["Bali", "Nusa Tenggara Barat", "Nusa Tenggara Timur"],
        },
        // 304 - Malaysia: MYS minus Sabah and Sarawak
        304 => Strategy::Remainder {
            country: "MYS",
            subtract_provinces: &["Sabah", "Sarawak"],
            subtract_disputed: &[],
            merge_disputed: &[],
        },
        // 305 - Maluku Islands: merge of its provinces
        305 => Strategy::Admin1 {
            country: "IDN",
            provinces: &["Maluku", "Maluku Utara"],
        },
        // 308 - Nakhchivan: exclave of Azerbaijan
        308 => Strategy::Admin1 {
            country: "AZE",
            provinces: &["Naxçıvan"],
        },
        // 310 - Pakistan: PAK minus Kashmir
        310 => Strategy::DisputedRemainder {
            country: "PAK",
            subtract: &["Kashmir"],
        },
        // 311 - Papua (Indonesian): merge of its provinces
        311 => Strategy::Admin1 {
            country: "IDN",
            provinces: &["Papua", "Papua Barat"],
        },
        // 313 - Russia in Asia: boundary clip, shedding ridge slivers
        313 => Strategy::Clip {
            country: "RUS",
            side: Side::East,
            absorb: Some((30.0, 59.0)),
            subtract: &[],
            subtract_codes: &[],
        },
        // 314 - Sabah: state of Malaysia
        314 => Strategy::Admin1 {
            country: "MYS",
            provinces: &["Sabah"],
        },
        // 315 - Sarawak: state of Malaysia
        315 => Strategy::Admin1 {
            country: "MYS",
            provinces: &["Sarawak"],
        },
        // 316 - Sikkim: state of India
        316 => Strategy::Admin1 {
            country: "IND",
            provinces: &["Sikkim"],
        },
        // 318 - South Ossetia: from the disputed layer
        318 => Strategy::Disputed {
            query: "South Ossetia",
            merge: &[],
        },
        // 320 - Sulawesi: merge of its provinces
        320 => Strategy::Admin1 {
            country: "IDN",
            provinces: &[
                "Sulawesi Barat",
                "Sulawesi Selatan",
                "Sulawesi Tengah",
                "Sulawesi Tenggara",
                "Sulawesi Utara",
                "Gorontalo",
            ],
        },
        // 321 - Sumatra: merge of its provinces
        321 => Strategy::Admin1 {
            country: "IDN",
            provinces: &[
                "Aceh",
                "Bengkulu",
                "Jambi",
                "Kepulauan Bangka Belitung",
                "Kepulauan Riau",
                "Lampung",
                "Riau",
                "Sumatera Barat",
                "Sumatera Selatan",
                "Sumatera Utara",
            ],
        },
        // 325 - Tibet: Xizang autonomous region
        325 => Strategy::Admin1 {
            country: "CHN",
            provinces: &["Xizang"],
        },
        // 327 - Turkey in Asia: boundary clip
        327 => Strategy::Clip {
            country: "TUR",
            side: Side::East,
            absorb: None,
            subtract: &[],
            subtract_codes: &[],
        },
        // Everything else matches directly on its ISO A3 code
        _ => Strategy::Direct {
            code: None,
            merge: &[],
        },
    }
}
