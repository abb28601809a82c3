//! The 330 TCC destination records
//!
//! Row fields, positional:
//! (tcc_index, name, region, iso_a2, iso_a3, iso_n3, sovereign, class)

use super::DestinationClass::{self, Antarctic, Country, Disputed, Subnational, Territory};

pub(super) type Row = (
    u16,
    &'static str,
    &'static str,
    Option<&'static str>,
    Option<&'static str>,
    Option<u16>,
    &'static str,
    DestinationClass,
);

pub(super) const ROWS: &[Row] = &[
    // === Pacific Ocean (1-40) ===
    (1, "Austral Islands", "Pacific Ocean", None, None, None, "France", Territory),
    (2, "Australia", "Pacific Ocean", Some("AU"), Some("AUS"), Some(36), "Australia", Country),
    (3, "Chatham Islands", "Pacific Ocean", None, None, None, "New Zealand", Territory),
    (4, "Cook Islands", "Pacific Ocean", Some("CK"), Some("COK"), Some(184), "Cook Islands", Country),
    (5, "Easter Island", "Pacific Ocean", None, None, None, "Chile", Territory),
    (6, "Fiji Islands", "Pacific Ocean", Some("FJ"), Some("FJI"), Some(242), "Fiji", Country),
    (7, "French Polynesia", "Pacific Ocean", Some("PF"), Some("PYF"), Some(258), "France", Territory),
    (8, "Galapagos Islands", "Pacific Ocean", None, None, None, "Ecuador", Subnational),
    (9, "Guam", "Pacific Ocean", Some("GU"), Some("GUM"), Some(316), "United States", Territory),
    (10, "Hawaiian Islands", "Pacific Ocean", None, None, None, "United States", Subnational),
    (11, "Juan Fernandez Islands", "Pacific Ocean", None, None, None, "Chile", Territory),
    (12, "Kiribati", "Pacific Ocean", Some("KI"), Some("KIR"), Some(296), "Kiribati", Country),
    (13, "Line/Phoenix Islands", "Pacific Ocean", None, None, None, "Kiribati", Territory),
    (14, "Lord Howe Island", "Pacific Ocean", None, None, None, "Australia", Territory),
    (15, "Marquesas Islands", "Pacific Ocean", None, None, None, "France", Territory),
    (16, "Marshall Islands", "Pacific Ocean", Some("MH"), Some("MHL"), Some(584), "Marshall Islands", Country),
    (17, "Micronesia", "Pacific Ocean", Some("FM"), Some("FSM"), Some(583), "Micronesia", Country),
    (18, "Midway Island", "Pacific Ocean", None, None, None, "United States", Territory),
    (19, "Nauru", "Pacific Ocean", Some("NR"), Some("NRU"), Some(520), "Nauru", Country),
    (20, "New Caledonia & Dependencies", "Pacific Ocean", Some("NC"), Some("NCL"), Some(540), "France", Territory),
    (21, "New Zealand", "Pacific Ocean", Some("NZ"), Some("NZL"), Some(554), "New Zealand", Country),
    (22, "Niue", "Pacific Ocean", Some("NU"), Some("NIU"), Some(570), "Niue", Country),
    (23, "Norfolk Island", "Pacific Ocean", Some("NF"), Some("NFK"), Some(574), "Australia", Territory),
    (24, "Northern Marianas", "Pacific Ocean", Some("MP"), Some("MNP"), Some(580), "United States", Territory),
    (25, "Ogasawara", "Pacific Ocean", None, None, None, "Japan", Territory),
    (26, "Palau", "Pacific Ocean", Some("PW"), Some("PLW"), Some(585), "Palau", Country),
    (27, "Papua New Guinea", "Pacific Ocean", Some("PG"), Some("PNG"), Some(598), "Papua New Guinea", Country),
    (28, "Papua New Guinea \u{2013} Islands Region", "Pacific Ocean", None, None, None, "Papua New Guinea", Subnational),
    (29, "Pitcairn Island", "Pacific Ocean", Some("PN"), Some("PCN"), Some(612), "United Kingdom", Territory),
    (30, "Ryukyu Islands", "Pacific Ocean", None, None, None, "Japan", Subnational),
    (31, "Samoa American", "Pacific Ocean", Some("AS"), Some("ASM"), Some(16), "United States", Territory),
    (32, "Samoa", "Pacific Ocean", Some("WS"), Some("WSM"), Some(882), "Samoa", Country),
    (33, "Solomon Islands", "Pacific Ocean", Some("SB"), Some("SLB"), Some(90), "Solomon Islands", Country),
    (34, "Tasmania", "Pacific Ocean", None, None, None, "Australia", Subnational),
    (35, "Tokelau Islands", "Pacific Ocean", Some("TK"), Some("TKL"), Some(772), "New Zealand", Territory),
    (36, "Tonga", "Pacific Ocean", Some("TO"), Some("TON"), Some(776), "Tonga", Country),
    (37, "Tuvalu", "Pacific Ocean", Some("TV"), Some("TUV"), Some(798), "Tuvalu", Country),
    (38, "Vanuatu", "Pacific Ocean", Some("VU"), Some("VUT"), Some(548), "Vanuatu", Country),
    (39, "Wake Island", "Pacific Ocean", None, None, None, "United States", Territory),
    (40, "Wallis & Futuna Islands", "Pacific Ocean", Some("WF"), Some("WLF"), Some(876), "France", Territory),
    // === North America (41-46) ===
    (41, "Alaska", "North America", None, None, None, "United States", Subnational),
    (42, "Canada", "North America", Some("CA"), Some("CAN"), Some(124), "Canada", Country),
    (43, "Mexico", "North America", Some("MX"), Some("MEX"), Some(484), "Mexico", Country),
    (44, "Prince Edward Island", "North America", None, None, None, "Canada", Subnational),
    (45, "St. Pierre & Miquelon", "North America", Some("PM"), Some("SPM"), Some(666), "France", Territory),
    (46, "United States (Contiguous)", "North America", Some("US"), Some("USA"), Some(840), "United States", Country),
    // === Central America (47-53) ===
    (47, "Belize", "Central America", Some("BZ"), Some("BLZ"), Some(84), "Belize", Country),
    (48, "Costa Rica", "Central America", Some("CR"), Some("CRI"), Some(188), "Costa Rica", Country),
    (49, "El Salvador", "Central America", Some("SV"), Some("SLV"), Some(222), "El Salvador", Country),
    (50, "Guatemala", "Central America", Some("GT"), Some("GTM"), Some(320), "Guatemala", Country),
    (51, "Honduras", "Central America", Some("HN"), Some("HND"), Some(340), "Honduras", Country),
    (52, "Nicaragua", "Central America", Some("NI"), Some("NIC"), Some(558), "Nicaragua", Country),
    (53, "Panama", "Central America", Some("PA"), Some("PAN"), Some(591), "Panama", Country),
    // === South America (54-67) ===
    (54, "Argentina", "South America", Some("AR"), Some("ARG"), Some(32), "Argentina", Country),
    (55, "Bolivia", "South America", Some("BO"), Some("BOL"), Some(68), "Bolivia", Country),
    (56, "Brazil", "South America", Some("BR"), Some("BRA"), Some(76), "Brazil", Country),
    (57, "Chile", "South America", Some("CL"), Some("CHL"), Some(152), "Chile", Country),
    (58, "Colombia", "South America", Some("CO"), Some("COL"), Some(170), "Colombia", Country),
    (59, "Ecuador", "South America", Some("EC"), Some("ECU"), Some(218), "Ecuador", Country),
    (60, "French Guiana", "South America", Some("GF"), Some("GUF"), Some(254), "France", Territory),
    (61, "Guyana", "South America", Some("GY"), Some("GUY"), Some(328), "Guyana", Country),
    (62, "Nueva Esparta", "South America", None, None, None, "Venezuela", Subnational),
    (63, "Paraguay", "South America", Some("PY"), Some("PRY"), Some(600), "Paraguay", Country),
    (64, "Peru", "South America", Some("PE"), Some("PER"), Some(604), "Peru", Country),
    (65, "Suriname", "South America", Some("SR"), Some("SUR"), Some(740), "Suriname", Country),
    (66, "Uruguay", "South America", Some("UY"), Some("URY"), Some(858), "Uruguay", Country),
    (67, "Venezuela", "South America", Some("VE"), Some("VEN"), Some(862), "Venezuela", Country),
    // === Caribbean (68-98) ===
    (68, "Anguilla", "Caribbean", Some("AI"), Some("AIA"), Some(660), "United Kingdom", Territory),
    (69, "Antigua & Barbuda", "Caribbean", Some("AG"), Some("ATG"), Some(28), "Antigua and Barbuda", Country),
    (70, "Aruba", "Caribbean", Some("AW"), Some("ABW"), Some(533), "Netherlands", Territory),
    (71, "Bahamas", "Caribbean", Some("BS"), Some("BHS"), Some(44), "Bahamas", Country),
    (72, "Barbados", "Caribbean", Some("BB"), Some("BRB"), Some(52), "Barbados", Country),
    (73, "Bonaire", "Caribbean", None, Some("BES"), None, "Netherlands", Territory),
    (74, "Cayman Islands", "Caribbean", Some("KY"), Some("CYM"), Some(136), "United Kingdom", Territory),
    (75, "Cuba", "Caribbean", Some("CU"), Some("CUB"), Some(192), "Cuba", Country),
    (76, "Curacao", "Caribbean", Some("CW"), Some("CUW"), Some(531), "Netherlands", Territory),
    (77, "Dominica", "Caribbean", Some("DM"), Some("DMA"), Some(212), "Dominica", Country),
    (78, "Dominican Republic", "Caribbean", Some("DO"), Some("DOM"), Some(214), "Dominican Republic", Country),
    (79, "Grenada & Dependencies", "Caribbean", Some("GD"), Some("GRD"), Some(308), "Grenada", Country),
    (80, "Guadeloupe & Dependencies", "Caribbean", Some("GP"), Some("GLP"), Some(312), "France", Territory),
    (81, "Haiti", "Caribbean", Some("HT"), Some("HTI"), Some(332), "Haiti", Country),
    (82, "Jamaica", "Caribbean", Some("JM"), Some("JAM"), Some(388), "Jamaica", Country),
    (83, "Martinique", "Caribbean", Some("MQ"), Some("MTQ"), Some(474), "France", Territory),
    (84, "Montserrat", "Caribbean", Some("MS"), Some("MSR"), Some(500), "United Kingdom", Territory),
    (85, "Nevis", "Caribbean", None, None, None, "Saint Kitts and Nevis", Subnational),
    (86, "Puerto Rico", "Caribbean", Some("PR"), Some("PRI"), Some(630), "United States", Territory),
    (87, "Saba & Sint Eustatius", "Caribbean", None, Some("BES"), None, "Netherlands", Territory),
    (88, "St. Barth\u{e9}lemy", "Caribbean", Some("BL"), Some("BLM"), Some(652), "France", Territory),
    (89, "St. Kitts", "Caribbean", None, None, None, "Saint Kitts and Nevis", Subnational),
    (90, "St. Lucia", "Caribbean", Some("LC"), Some("LCA"), Some(662), "Saint Lucia", Country),
    (91, "St. Martin", "Caribbean", Some("MF"), Some("MAF"), Some(663), "France", Territory),
    (92, "St. Vincent & the Grenadines", "Caribbean", Some("VC"), Some("VCT"), Some(670), "Saint Vincent and the Grenadines", Country),
    (93, "San Andres & Providencia", "Caribbean", None, None, None, "Colombia", Subnational),
    (94, "Sint Maarten", "Caribbean", Some("SX"), Some("SXM"), Some(534), "Netherlands", Territory),
    (95, "Trinidad & Tobago", "Caribbean", Some("TT"), Some("TTO"), Some(780), "Trinidad and Tobago", Country),
    (96, "Turks & Caicos Islands", "Caribbean", Some("TC"), Some("TCA"), Some(796), "United Kingdom", Territory),
    (97, "Virgin Islands British", "Caribbean", Some("VG"), Some("VGB"), Some(92), "United Kingdom", Territory),
    (98, "Virgin Islands U.S.", "Caribbean", Some("VI"), Some("VIR"), Some(850), "United States", Territory),
    // === Atlantic Ocean (99-112) ===
    (99, "Ascension", "Atlantic Ocean", None, None, None, "United Kingdom", Territory),
    (100, "Azores Islands", "Atlantic Ocean", None, None, None, "Portugal", Subnational),
    (101, "Bermuda", "Atlantic Ocean", Some("BM"), Some("BMU"), Some(60), "United Kingdom", Territory),
    (102, "Canary Islands", "Atlantic Ocean", None, None, None, "Spain", Subnational),
    (103, "Cape Verde Islands", "Atlantic Ocean", Some("CV"), Some("CPV"), Some(132), "Cape Verde", Country),
    (104, "Falkland Islands", "Atlantic Ocean", Some("FK"), Some("FLK"), Some(238), "United Kingdom", Territory),
    (105, "Faroe Islands", "Atlantic Ocean", Some("FO"), Some("FRO"), Some(234), "Denmark", Territory),
    (106, "Fernando de Noronha", "Atlantic Ocean", None, None, None, "Brazil", Territory),
    (107, "Greenland", "Atlantic Ocean", Some("GL"), Some("GRL"), Some(304), "Denmark", Territory),
    (108, "Iceland", "Atlantic Ocean", Some("IS"), Some("ISL"), Some(352), "Iceland", Country),
    (109, "Madeira", "Atlantic Ocean", None, None, None, "Portugal", Subnational),
    (110, "South Georgia & the South Sandwich Islands", "Atlantic Ocean", Some("GS"), Some("SGS"), Some(239), "United Kingdom", Territory),
    (111, "St. Helena", "Atlantic Ocean", None, None, None, "United Kingdom", Territory),
    (112, "Tristan da Cunha", "Atlantic Ocean", None, None, None, "United Kingdom", Territory),
    // === Europe & Mediterranean (113-180) ===
    (113, "Aland Islands", "Europe & Mediterranean", Some("AX"), Some("ALA"), Some(248), "Finland", Subnational),
    (114, "Albania", "Europe & Mediterranean", Some("AL"), Some("ALB"), Some(8), "Albania", Country),
    (115, "Andorra", "Europe & Mediterranean", Some("AD"), Some("AND"), Some(20), "Andorra", Country),
    (116, "Austria", "Europe & Mediterranean", Some("AT"), Some("AUT"), Some(40), "Austria", Country),
    (117, "Balearic Islands", "Europe & Mediterranean", None, None, None, "Spain", Subnational),
    (118, "Belarus", "Europe & Mediterranean", Some("BY"), Some("BLR"), Some(112), "Belarus", Country),
    (119, "Belgium", "Europe & Mediterranean", Some("BE"), Some("BEL"), Some(56), "Belgium", Country),
    (120, "Bosnia & Herzegovina", "Europe & Mediterranean", Some("BA"), Some("BIH"), Some(70), "Bosnia and Herzegovina", Country),
    (121, "Bulgaria", "Europe & Mediterranean", Some("BG"), Some("BGR"), Some(100), "Bulgaria", Country),
    (122, "Corsica", "Europe & Mediterranean", None, None, None, "France", Subnational),
    (123, "Crete", "Europe & Mediterranean", None, None, None, "Greece", Subnational),
    (124, "Croatia", "Europe & Mediterranean", Some("HR"), Some("HRV"), Some(191), "Croatia", Country),
    (125, "Cyprus British Sovereign Base Areas", "Europe & Mediterranean", None, None, None, "United Kingdom", Territory),
    (126, "Cyprus Republic", "Europe & Mediterranean", Some("CY"), Some("CYP"), Some(196), "Cyprus", Country),
    (127, "Cyprus Turkish Fed. State", "Europe & Mediterranean", None, None, None, "Cyprus", Disputed),
    (128, "Czech Republic", "Europe & Mediterranean", Some("CZ"), Some("CZE"), Some(203), "Czech Republic", Country),
    (129, "Denmark", "Europe & Mediterranean", Some("DK"), Some("DNK"), Some(208), "Denmark", Country),
    (130, "England", "Europe & Mediterranean", None, None, None, "United Kingdom", Subnational),
    (131, "Estonia", "Europe & Mediterranean", Some("EE"), Some("EST"), Some(233), "Estonia", Country),
    (132, "Finland", "Europe & Mediterranean", Some("FI"), Some("FIN"), Some(246), "Finland", Country),
    (133, "France", "Europe & Mediterranean", Some("FR"), Some("FRA"), Some(250), "France", Country),
    (134, "Germany", "Europe & Mediterranean", Some("DE"), Some("DEU"), Some(276), "Germany", Country),
    (135, "Gibraltar", "Europe & Mediterranean", Some("GI"), Some("GIB"), Some(292), "United Kingdom", Territory),
    (136, "Greece", "Europe & Mediterranean", Some("GR"), Some("GRC"), Some(300), "Greece", Country),
    (137, "Greek Aegean Islands", "Europe & Mediterranean", None, None, None, "Greece", Subnational),
    (138, "Guernsey & Dependencies", "Europe & Mediterranean", Some("GG"), Some("GGY"), Some(831), "United Kingdom", Territory),
    (139, "Hungary", "Europe & Mediterranean", Some("HU"), Some("HUN"), Some(348), "Hungary", Country),
    (140, "Ionian Islands", "Europe & Mediterranean", None, None, None, "Greece", Subnational),
    (141, "Ireland", "Europe & Mediterranean", Some("IE"), Some("IRL"), Some(372), "Ireland", Country),
    (142, "Ireland Northern", "Europe & Mediterranean", None, None, None, "United Kingdom", Subnational),
    (143, "Isle of Man", "Europe & Mediterranean", Some("IM"), Some("IMN"), Some(833), "United Kingdom", Territory),
    (144, "Italy", "Europe & Mediterranean", Some("IT"), Some("ITA"), Some(380), "Italy", Country),
    (145, "Jersey", "Europe & Mediterranean", Some("JE"), Some("JEY"), Some(832), "United Kingdom", Territory),
    (146, "Kaliningrad", "Europe & Mediterranean", None, None, None, "Russia", Subnational),
    (147, "Kosovo", "Europe & Mediterranean", Some("XK"), Some("XKX"), None, "Kosovo", Disputed),
    (148, "Lampedusa", "Europe & Mediterranean", None, None, None, "Italy", Territory),
    (149, "Latvia", "Europe & Mediterranean", Some("LV"), Some("LVA"), Some(428), "Latvia", Country),
    (150, "Liechtenstein", "Europe & Mediterranean", Some("LI"), Some("LIE"), Some(438), "Liechtenstein", Country),
    (151, "Lithuania", "Europe & Mediterranean", Some("LT"), Some("LTU"), Some(440), "Lithuania", Country),
    (152, "Luxembourg", "Europe & Mediterranean", Some("LU"), Some("LUX"), Some(442), "Luxembourg", Country),
    (153, "Malta", "Europe & Mediterranean", Some("MT"), Some("MLT"), Some(470), "Malta", Country),
    (154, "Moldova", "Europe & Mediterranean", Some("MD"), Some("MDA"), Some(498), "Moldova", Country),
    (155, "Monaco", "Europe & Mediterranean", Some("MC"), Some("MCO"), Some(492), "Monaco", Country),
    (156, "Montenegro", "Europe & Mediterranean", Some("ME"), Some("MNE"), Some(499), "Montenegro", Country),
    (157, "Netherlands", "Europe & Mediterranean", Some("NL"), Some("NLD"), Some(528), "Netherlands", Country),
    (158, "North Macedonia", "Europe & Mediterranean", Some("MK"), Some("MKD"), Some(807), "North Macedonia", Country),
    (159, "Norway", "Europe & Mediterranean", Some("NO"), Some("NOR"), Some(578), "Norway", Country),
    (160, "Poland", "Europe & Mediterranean", Some("PL"), Some("POL"), Some(616), "Poland", Country),
    (161, "Portugal", "Europe & Mediterranean", Some("PT"), Some("PRT"), Some(620), "Portugal", Country),
    (162, "Romania", "Europe & Mediterranean", Some("RO"), Some("ROU"), Some(642), "Romania", Country),
    (163, "Russia", "Europe & Mediterranean", Some("RU"), Some("RUS"), Some(643), "Russia", Country),
    (164, "San Marino", "Europe & Mediterranean", Some("SM"), Some("SMR"), Some(674), "San Marino", Country),
    (165, "Sardinia", "Europe & Mediterranean", None, None, None, "Italy", Subnational),
    (166, "Scotland", "Europe & Mediterranean", None, None, None, "United Kingdom", Subnational),
    (167, "Serbia", "Europe & Mediterranean", Some("RS"), Some("SRB"), Some(688), "Serbia", Country),
    (168, "Sicily", "Europe & Mediterranean", None, None, None, "Italy", Subnational),
    (169, "Slovakia", "Europe & Mediterranean", Some("SK"), Some("SVK"), Some(703), "Slovakia", Country),
    (170, "Slovenia", "Europe & Mediterranean", Some("SI"), Some("SVN"), Some(705), "Slovenia", Country),
    (171, "Spain", "Europe & Mediterranean", Some("ES"), Some("ESP"), Some(724), "Spain", Country),
    (172, "Spitsbergen", "Europe & Mediterranean", None, Some("SJM"), Some(744), "Norway", Territory),
    (173, "Srpska", "Europe & Mediterranean", None, None, None, "Bosnia and Herzegovina", Subnational),
    (174, "Sweden", "Europe & Mediterranean", Some("SE"), Some("SWE"), Some(752), "Sweden", Country),
    (175, "Switzerland", "Europe & Mediterranean", Some("CH"), Some("CHE"), Some(756), "Switzerland", Country),
    (176, "Transnistria", "Europe & Mediterranean", None, None, None, "Moldova", Disputed),
    (177, "Turkey in Europe", "Europe & Mediterranean", None, None, None, "Turkey", Subnational),
    (178, "Ukraine", "Europe & Mediterranean", Some("UA"), Some("UKR"), Some(804), "Ukraine", Country),
    (179, "Vatican City", "Europe & Mediterranean", Some("VA"), Some("VAT"), Some(336), "Vatican City", Country),
    (180, "Wales", "Europe & Mediterranean", None, None, None, "United Kingdom", Subnational),
    // === Antarctica (181-187) ===
    (181, "Argentine Antarctica", "Antarctica", None, None, None, "Argentina", Antarctic),
    (182, "Australian Antarctic Territory", "Antarctica", None, None, None, "Australia", Antarctic),
    (183, "British Antarctic Territory", "Antarctica", None, None, None, "United Kingdom", Antarctic),
    (184, "Chilean Antarctic Territory", "Antarctica", None, None, None, "Chile", Antarctic),
    (185, "French Antarctica", "Antarctica", None, None, None, "France", Antarctic),
    (186, "New Zealand Antarctica", "Antarctica", None, None, None, "New Zealand", Antarctic),
    (187, "Norwegian Dependencies", "Antarctica", None, None, None, "Norway", Antarctic),
    // === Africa (188-242) ===
    (188, "Algeria", "Africa", Some("DZ"), Some("DZA"), Some(12), "Algeria", Country),
    (189, "Angola", "Africa", Some("AO"), Some("AGO"), Some(24), "Angola", Country),
    (190, "Benin", "Africa", Some("BJ"), Some("BEN"), Some(204), "Benin", Country),
    (191, "Botswana", "Africa", Some("BW"), Some("BWA"), Some(72), "Botswana", Country),
    (192, "Burkina Faso", "Africa", Some("BF"), Some("BFA"), Some(854), "Burkina Faso", Country),
    (193, "Burundi", "Africa", Some("BI"), Some("BDI"), Some(108), "Burundi", Country),
    (194, "Cabinda", "Africa", None, None, None, "Angola", Subnational),
    (195, "Cameroon", "Africa", Some("CM"), Some("CMR"), Some(120), "Cameroon", Country),
    (196, "Central African Republic", "Africa", Some("CF"), Some("CAF"), Some(140), "Central African Republic", Country),
    (197, "Chad", "Africa", Some("TD"), Some("TCD"), Some(148), "Chad", Country),
    (198, "Congo Democratic Republic", "Africa", Some("CD"), Some("COD"), Some(180), "Democratic Republic of the Congo", Country),
    (199, "Congo Republic", "Africa", Some("CG"), Some("COG"), Some(178), "Republic of the Congo", Country),
    (200, "C\u{f4}te d'Ivoire", "Africa", Some("CI"), Some("CIV"), Some(384), "C\u{f4}te d'Ivoire", Country),
    (201, "Djibouti", "Africa", Some("DJ"), Some("DJI"), Some(262), "Djibouti", Country),
    (202, "Egypt in Africa", "Africa", Some("EG"), Some("EGY"), Some(818), "Egypt", Country),
    (203, "Equatorial Guinea Bioko", "Africa", None, None, None, "Equatorial Guinea", Subnational),
    (204, "Equatorial Guinea Rio Muni", "Africa", None, None, None, "Equatorial Guinea", Subnational),
    (205, "Eritrea", "Africa", Some("ER"), Some("ERI"), Some(232), "Eritrea", Country),
    (206, "Eswatini", "Africa", Some("SZ"), Some("SWZ"), Some(748), "Eswatini", Country),
    (207, "Ethiopia", "Africa", Some("ET"), Some("ETH"), Some(231), "Ethiopia", Country),
    (208, "Gabon", "Africa", Some("GA"), Some("GAB"), Some(266), "Gabon", Country),
    (209, "Gambia", "Africa", Some("GM"), Some("GMB"), Some(270), "Gambia", Country),
    (210, "Ghana", "Africa", Some("GH"), Some("GHA"), Some(288), "Ghana", Country),
    (211, "Guinea", "Africa", Some("GN"), Some("GIN"), Some(324), "Guinea", Country),
    (212, "Guinea-Bissau", "Africa", Some("GW"), Some("GNB"), Some(624), "Guinea-Bissau", Country),
    (213, "Kenya", "Africa", Some("KE"), Some("KEN"), Some(404), "Kenya", Country),
    (214, "Lesotho", "Africa", Some("LS"), Some("LSO"), Some(426), "Lesotho", Country),
    (215, "Liberia", "Africa", Some("LR"), Some("LBR"), Some(430), "Liberia", Country),
    (216, "Libya", "Africa", Some("LY"), Some("LBY"), Some(434), "Libya", Country),
    (217, "Malawi", "Africa", Some("MW"), Some("MWI"), Some(454), "Malawi", Country),
    (218, "Mali", "Africa", Some("ML"), Some("MLI"), Some(466), "Mali", Country),
    (219, "Mauritania", "Africa", Some("MR"), Some("MRT"), Some(478), "Mauritania", Country),
    (220, "Morocco", "Africa", Some("MA"), Some("MAR"), Some(504), "Morocco", Country),
    (221, "Morocco Spanish", "Africa", None, None, None, "Spain", Territory),
    (222, "Mozambique", "Africa", Some("MZ"), Some("MOZ"), Some(508), "Mozambique", Country),
    (223, "Namibia", "Africa", Some("NA"), Some("NAM"), Some(516), "Namibia", Country),
    (224, "Niger", "Africa", Some("NE"), Some("NER"), Some(562), "Niger", Country),
    (225, "Nigeria", "Africa", Some("NG"), Some("NGA"), Some(566), "Nigeria", Country),
    (226, "Rwanda", "Africa", Some("RW"), Some("RWA"), Some(646), "Rwanda", Country),
    (227, "Sao Tome & Principe", "Africa", Some("ST"), Some("STP"), Some(678), "Sao Tome and Principe", Country),
    (228, "Senegal", "Africa", Some("SN"), Some("SEN"), Some(686), "Senegal", Country),
    (229, "Sierra Leone", "Africa", Some("SL"), Some("SLE"), Some(694), "Sierra Leone", Country),
    (230, "Somalia", "Africa", Some("SO"), Some("SOM"), Some(706), "Somalia", Country),
    (231, "Somaliland", "Africa", None, None, None, "Somalia", Disputed),
    (232, "South Africa", "Africa", Some("ZA"), Some("ZAF"), Some(710), "South Africa", Country),
    (233, "South Sudan", "Africa", Some("SS"), Some("SSD"), Some(728), "South Sudan", Country),
    (234, "Sudan", "Africa", Some("SD"), Some("SDN"), Some(729), "Sudan", Country),
    (235, "Tanzania", "Africa", Some("TZ"), Some("TZA"), Some(834), "Tanzania", Country),
    (236, "Togo", "Africa", Some("TG"), Some("TGO"), Some(768), "Togo", Country),
    (237, "Tunisia", "Africa", Some("TN"), Some("TUN"), Some(788), "Tunisia", Country),
    (238, "Uganda", "Africa", Some("UG"), Some("UGA"), Some(800), "Uganda", Country),
    (239, "Western Sahara", "Africa", Some("EH"), Some("ESH"), Some(732), "Western Sahara", Disputed),
    (240, "Zambia", "Africa", Some("ZM"), Some("ZMB"), Some(894), "Zambia", Country),
    (241, "Zanzibar", "Africa", None, None, None, "Tanzania", Subnational),
    (242, "Zimbabwe", "Africa", Some("ZW"), Some("ZWE"), Some(716), "Zimbabwe", Country),
    // === Middle East (243-263) ===
    (243, "Abu Dhabi", "Middle East", None, None, None, "United Arab Emirates", Subnational),
    (244, "Ajman", "Middle East", None, None, None, "United Arab Emirates", Subnational),
    (245, "Bahrain", "Middle East", Some("BH"), Some("BHR"), Some(48), "Bahrain", Country),
    (246, "Dubai", "Middle East", None, None, None, "United Arab Emirates", Subnational),
    (247, "Egypt in Asia", "Middle East", None, None, None, "Egypt", Subnational),
    (248, "Fujairah", "Middle East", None, None, None, "United Arab Emirates", Subnational),
    (249, "Iran", "Middle East", Some("IR"), Some("IRN"), Some(364), "Iran", Country),
    (250, "Iraq", "Middle East", Some("IQ"), Some("IRQ"), Some(368), "Iraq", Country),
    (251, "Israel", "Middle East", Some("IL"), Some("ISR"), Some(376), "Israel", Country),
    (252, "Jordan", "Middle East", Some("JO"), Some("JOR"), Some(400), "Jordan", Country),
    (253, "Kuwait", "Middle East", Some("KW"), Some("KWT"), Some(414), "Kuwait", Country),
    (254, "Lebanon", "Middle East", Some("LB"), Some("LBN"), Some(422), "Lebanon", Country),
    (255, "Oman", "Middle East", Some("OM"), Some("OMN"), Some(512), "Oman", Country),
    (256, "Palestine", "Middle East", Some("PS"), Some("PSE"), Some(275), "Palestine", Disputed),
    (257, "Qatar", "Middle East", Some("QA"), Some("QAT"), Some(634), "Qatar", Country),
    (258, "Ras Al Khaimah", "Middle East", None, None, None, "United Arab Emirates", Subnational),
    (259, "Saudi Arabia", "Middle East", Some("SA"), Some("SAU"), Some(682), "Saudi Arabia", Country),
    (260, "Sharjah", "Middle East", None, None, None, "United Arab Emirates", Subnational),
    (261, "Syria", "Middle East", Some("SY"), Some("SYR"), Some(760), "Syria", Country),
    (262, "Umm Al Qaiwain", "Middle East", None, None, None, "United Arab Emirates", Subnational),
    (263, "Yemen", "Middle East", Some("YE"), Some("YEM"), Some(887), "Yemen", Country),
    // === Indian Ocean (264-278) ===
    (264, "Andaman-Nicobar Islands", "Indian Ocean", None, None, None, "India", Subnational),
    (265, "British Indian Ocean Territory", "Indian Ocean", Some("IO"), Some("IOT"), Some(86), "United Kingdom", Territory),
    (266, "Christmas Island", "Indian Ocean", Some("CX"), Some("CXR"), Some(162), "Australia", Territory),
    (267, "Cocos Islands", "Indian Ocean", Some("CC"), Some("CCK"), Some(166), "Australia", Territory),
    (268, "Comoros", "Indian Ocean", Some("KM"), Some("COM"), Some(174), "Comoros", Country),
    (269, "Lakshadweep", "Indian Ocean", None, None, None, "India", Subnational),
    (270, "Madagascar", "Indian Ocean", Some("MG"), Some("MDG"), Some(450), "Madagascar", Country),
    (271, "Maldives", "Indian Ocean", Some("MV"), Some("MDV"), Some(462), "Maldives", Country),
    (272, "Mauritius & Dependencies", "Indian Ocean", Some("MU"), Some("MUS"), Some(480), "Mauritius", Country),
    (273, "Mayotte", "Indian Ocean", Some("YT"), Some("MYT"), Some(175), "France", Territory),
    (274, "Reunion", "Indian Ocean", Some("RE"), Some("REU"), Some(638), "France", Territory),
    (275, "Rodrigues Island", "Indian Ocean", None, None, None, "Mauritius", Territory),
    (276, "Seychelles", "Indian Ocean", Some("SC"), Some("SYC"), Some(690), "Seychelles", Country),
    (277, "Socotra", "Indian Ocean", None, None, None, "Yemen", Territory),
    (278, "Zil Elwannyen Sesel", "Indian Ocean", None, None, None, "Seychelles", Territory),
    // === Asia (279-330) ===
    (279, "Abkhazia", "Asia", None, None, None, "Georgia", Disputed),
    (280, "Afghanistan", "Asia", Some("AF"), Some("AFG"), Some(4), "Afghanistan", Country),
    (281, "Armenia", "Asia", Some("AM"), Some("ARM"), Some(51), "Armenia", Country),
    (282, "Azerbaijan", "Asia", Some("AZ"), Some("AZE"), Some(31), "Azerbaijan", Country),
    (283, "Bangladesh", "Asia", Some("BD"), Some("BGD"), Some(50), "Bangladesh", Country),
    (284, "Bhutan", "Asia", Some("BT"), Some("BTN"), Some(64), "Bhutan", Country),
    (285, "Brunei", "Asia", Some("BN"), Some("BRN"), Some(96), "Brunei", Country),
    (286, "Cambodia", "Asia", Some("KH"), Some("KHM"), Some(116), "Cambodia", Country),
    (287, "China People's Republic", "Asia", Some("CN"), Some("CHN"), Some(156), "China", Country),
    (288, "Georgia", "Asia", Some("GE"), Some("GEO"), Some(268), "Georgia", Country),
    (289, "Hainan Island", "Asia", None, None, None, "China", Subnational),
    (290, "Hong Kong", "Asia", Some("HK"), Some("HKG"), Some(344), "China", Territory),
    (291, "India", "Asia", Some("IN"), Some("IND"), Some(356), "India", Country),
    (292, "Indonesia Java", "Asia", None, None, None, "Indonesia", Subnational),
    (293, "Japan", "Asia", Some("JP"), Some("JPN"), Some(392), "Japan", Country),
    (294, "Jeju Island", "Asia", None, None, None, "South Korea", Subnational),
    (295, "Kalimantan", "Asia", None, None, None, "Indonesia", Subnational),
    (296, "Kashmir", "Asia", None, None, None, "Disputed", Disputed),
    (297, "Kazakhstan", "Asia", Some("KZ"), Some("KAZ"), Some(398), "Kazakhstan", Country),
    (298, "Korea North", "Asia", Some("KP"), Some("PRK"), Some(408), "North Korea", Country),
    (299, "Korea South", "Asia", Some("KR"), Some("KOR"), Some(410), "South Korea", Country),
    (300, "Kyrgyzstan", "Asia", Some("KG"), Some("KGZ"), Some(417), "Kyrgyzstan", Country),
    (301, "Laos", "Asia", Some("LA"), Some("LAO"), Some(418), "Laos", Country),
    (302, "Lesser Sunda Islands", "Asia", None, None, None, "Indonesia", Subnational),
    (303, "Macau", "Asia", Some("MO"), Some("MAC"), Some(446), "China", Territory),
    (304, "Malaysia", "Asia", Some("MY"), Some("MYS"), Some(458), "Malaysia", Country),
    (305, "Maluku Islands", "Asia", None, None, None, "Indonesia", Subnational),
    (306, "Mongolia", "Asia", Some("MN"), Some("MNG"), Some(496), "Mongolia", Country),
    (307, "Myanmar", "Asia", Some("MM"), Some("MMR"), Some(104), "Myanmar", Country),
    (308, "Nakhchivan", "Asia", None, None, None, "Azerbaijan", Subnational),
    (309, "Nepal", "Asia", Some("NP"), Some("NPL"), Some(524), "Nepal", Country),
    (310, "Pakistan", "Asia", Some("PK"), Some("PAK"), Some(586), "Pakistan", Country),
    (311, "Papua", "Asia", None, None, None, "Indonesia", Subnational),
    (312, "Philippines", "Asia", Some("PH"), Some("PHL"), Some(608), "Philippines", Country),
    (313, "Russia in Asia", "Asia", None, None, None, "Russia", Subnational),
    (314, "Sabah", "Asia", None, None, None, "Malaysia", Subnational),
    (315, "Sarawak", "Asia", None, None, None, "Malaysia", Subnational),
    (316, "Sikkim", "Asia", None, None, None, "India", Subnational),
    (317, "Singapore", "Asia", Some("SG"), Some("SGP"), Some(702), "Singapore", Country),
    (318, "South Ossetia", "Asia", None, None, None, "Georgia", Disputed),
    (319, "Sri Lanka", "Asia", Some("LK"), Some("LKA"), Some(144), "Sri Lanka", Country),
    (320, "Sulawesi", "Asia", None, None, None, "Indonesia", Subnational),
    (321, "Sumatra", "Asia", None, None, None, "Indonesia", Subnational),
    (322, "Taiwan", "Asia", Some("TW"), Some("TWN"), Some(158), "Taiwan", Country),
    (323, "Tajikistan", "Asia", Some("TJ"), Some("TJK"), Some(762), "Tajikistan", Country),
    (324, "Thailand", "Asia", Some("TH"), Some("THA"), Some(764), "Thailand", Country),
    (325, "Tibet", "Asia", None, None, None, "China", Subnational),
    (326, "Timor-Leste", "Asia", Some("TL"), Some("TLS"), Some(626), "Timor-Leste", Country),
    (327, "Turkey in Asia", "Asia", None, None, None, "Turkey", Subnational),
    (328, "Turkmenistan", "Asia", Some("TM"), Some("TKM"), Some(795), "Turkmenistan", Country),
    (329, "Uzbekistan", "Asia", Some("UZ"), Some("UZB"), Some(860), "Uzbekistan", Country),
    (330, "Vietnam", "Asia", Some("VN"), Some("VNM"), Some(704), "Vietnam", Country),
];
