//! Catalog of verified Android device fingerprints
//!
//! Every entry was checked to receive max-resolution media from the API.
//! Entries are a snapshot: they may be added or removed wholesale but never
//! edited. Changing a single byte re-assigns every account using that device
//! to a new fingerprint.

use rand::Rng;

/// CPU ABI list reported for every catalog device
pub const CPU_ABI: &str = "armeabi-v7a:armeabi";

/// Known-good device fingerprints, in publication order
pub const GOOD_DEVICES: &[&str] = &[
    "24/7.0; 380dpi; 1080x1920; OnePlus; ONEPLUS A3010; OnePlus3T; qcom",
    "23/6.0.1; 640dpi; 1440x2392; LGE/lge; RS988; h1; h1",
    "24/7.0; 640dpi; 1440x2560; HUAWEI; LON-L29; HWLON; hi3660",
    "23/6.0.1; 640dpi; 1440x2560; ZTE; ZTE A2017U; ailsa_ii; qcom",
    "23/6.0.1; 640dpi; 1440x2560; samsung; SM-G935F; hero2lte; samsungexynos8890",
    "23/6.0.1; 640dpi; 1440x2560; samsung; SM-G930F; herolte; samsungexynos8890",
    "24/7.0; 420dpi; 1080x2094; samsung; SM-G955W; dream2qltecan; qcom",
    "24/7.0; 480dpi; 1080x1920; samsung; SM-A520F; a5y17lte; samsungexynos7880",
    "19/4.4.4; 240dpi; 480x800; samsung; GT-I9060I; grandneove3g; sc8830",
    "24/7.0; 320dpi; 720x1280; samsung; SM-A310F; a3xelte; samsungexynos7580",
    "24/7.0; 480dpi; 1080x1920; samsung; SM-A510F; a5xelte; samsungexynos7580",
    "24/7.0; 480dpi; 1080x1920; samsung; SM-G935F; hero2lte; samsungexynos8890",
    "22/5.1.1; 320dpi; 720x1280; samsung; SM-J320F; j3xlte; sc8830",
    "21/5.0.2; 240dpi; 480x854; ag; style; style; mt6582",
    "25/7.1.2; 320dpi; 720x1280; Xiaomi; Redmi 4X; santoni; qcom",
    "23/6.0.1; 320dpi; 720x1280; Xiaomi; Redmi 3S; land; qcom",
    "22/5.1.1; 240dpi; 480x800; samsung; SM-J120F; j1xlte; universal3475",
    "23/6.0.1; 480dpi; 1080x1920; Xiaomi; Redmi 4; markw; qcom",
    "24/7.0; 480dpi; 1080x2076; samsung; SM-G950F; dreamlte; samsungexynos8895",
    "23/6.0.1; 320dpi; 720x1280; samsung; SM-G570F; on5xelte; samsungexynos7570",
    "23/6.0; 480dpi; 1080x1920; Xiaomi; Redmi Note 4; nikel; mt6797",
    "24/7.0; 640dpi; 1440x2560; samsung/Verizon; SM-G925V; zeroltevzw; samsungexynos7420",
    "24/7.0; 480dpi; 1080x1920; samsung; SM-G930F; herolte; samsungexynos8890",
    "22/5.1.1; 240dpi; 480x854; LENOVO/Lenovo; Lenovo A2020a40; angus3A4; qcom",
    "23/6.0.1; 480dpi; 1080x1920; samsung; SM-G900F; klte; qcom",
    "24/7.0; 480dpi; 1080x1920; Xiaomi/xiaomi; Redmi Note 4; mido; qcom",
    "23/6.0.1; 240dpi; 540x960; samsung; SM-G532F; grandpplte; mt6735",
    "22/5.1; 480dpi; 1080x1920; Meizu; m3 note; m3note; mt6755",
    "21/5.0.2; 240dpi; 540x960; samsung; SM-A300F; a3lte; qcom",
    "23/6.0.1; 420dpi; 1080x1920; LeMobile/LeEco; Le X527; le_s2_ww; qcom",
    "24/7.0; 640dpi; 1440x2560; samsung; SM-G925F; zerolte; samsungexynos7420",
    "23/6.0.1; 320dpi; 720x1280; samsung; SM-A500F; a5lte; qcom",
    "24/7.0; 640dpi; 1440x2560; samsung; SM-G920F; zeroflte; samsungexynos7420",
    "19/4.4.2; 320dpi; 720x1280; samsung; GT-I9301I; s3ve3g; qcom",
    "24/7.0; 320dpi; 720x1280; samsung; SM-J710F; j7xelte; samsungexynos7870",
    "23/6.0.1; 480dpi; 1080x1920; samsung; SM-G610F; on7xelte; samsungexynos7870",
    "25/7.1.1; 420dpi; 1080x2094; samsung; SM-N950U; greatqlte; qcom",
    "24/7.0; 320dpi; 720x1280; HMD Global/Nokia; TA-1032; NE1; mt6735",
    "21/5.0.2; 640dpi; 1440x2560; samsung/Verizon; SM-G920V; zerofltevzw; samsungexynos7420",
    "24/7.0; 420dpi; 1080x2094; samsung; SM-G955F; dream2lte; samsungexynos8895",
    "23/6.0.1; 480dpi; 1080x1920; Xiaomi; Redmi Note 3; kenzo; qcom",
    "24/7.0; 420dpi; 1080x2094; samsung; SM-G955U; dream2qltesq; qcom",
    "24/7.0; 480dpi; 1080x2076; samsung; SM-G950U; dreamqltesq; qcom",
    "22/5.1.1; 213dpi; 800x1280; samsung; SM-T330; milletwifi; qcom",
    "24/7.0; 420dpi; 1080x1920; samsung; SM-G928R4; zenlteusc; samsungexynos7420",
    "19/4.4.2; 320dpi; 720x1184; HTC/htc; HTC Desire 820G PLUS dual sim; htc_a50mg; mt6592",
    "23/6.0.1; 320dpi; 720x1280; Xiaomi; Redmi 4A; rolex; qcom",
    "24/7.0; 320dpi; 720x1280; samsung; SM-A320F; a3y17lte; samsungexynos7870",
    "22/5.1.1; 240dpi; 540x960; samsung; SM-G531H; grandprimeve3g; sc8830",
    "23/6.0.1; 480dpi; 1080x1920; Xiaomi; MI 5; gemini; qcom",
    "22/5.1; 320dpi; 720x1280; Meizu; M3s; M3s; mt6755",
    "23/6.0.1; 640dpi; 1440x2560; samsung; SM-G925W8; zeroltebmc; samsungexynos7420",
    "22/5.1.1; 320dpi; 720x1280; samsung; SM-E500H; e53g; qcom",
    "19/4.4.2; 213dpi; 800x1280; samsung; SM-T231; degas3g; pxa1088",
    "23/6.0.1; 320dpi; 720x1280; Xiaomi; Redmi 4X; santoni; qcom",
    "23/6.0; 320dpi; 720x1184; TECNO/tecno; TECNO-N9; N9; mt6735",
    "23/6.0.1; 480dpi; 1080x1776; Sony; D6633; D6633; qcom",
    "22/5.1.1; 240dpi; 480x800; samsung; SM-J105H; j1mini3gxw; sc8830",
    "22/5.1.1; 240dpi; 540x960; samsung; SM-G531F; grandprimevelte; pxa1908",
    "23/6.0; 320dpi; 720x1280; Infinix; Infinix HOT 4 Lite; X557-Lite; mt6580",
    "25/7.1.1; 272dpi; 720x1198; Sony; F5321; F5321; qcom",
    "23/6.0.1; 480dpi; 1080x1920; Xiaomi; MI 5s; capricorn; qcom",
    "24/7.0; 640dpi; 1440x2560; samsung; SM-G935F; hero2lte; samsungexynos8890",
    "16/4.1.2; 240dpi; 480x800; samsung; GT-I8552; delos3geur; qcom",
    "24/7.0; 560dpi; 1440x2560; samsung; SM-G925F; zerolte; samsungexynos7420",
    "23/6.0.1; 320dpi; 720x1280; samsung; SM-J510FN; j5xnlte; qcom",
    "23/6.0; 320dpi; 720x1280; LENOVO/Lenovo; Lenovo K10a40; K10a40; mt6735",
    "22/5.1.1; 240dpi; 540x960; samsung; SM-J200H; j23g; sc8830",
    "23/6.0.1; 320dpi; 720x1280; samsung; SM-A320FL; a3y17lte; samsungexynos7870",
    "24/7.0; 320dpi; 720x1199; LGE/lge; LG-M400; msf3; msf3",
    "23/6.0.1; 480dpi; 1080x1776; Sony; D6503; D6503; qcom",
    "24/7.0; 320dpi; 720x1193; LGE/MetroPCS; LGMP260; lv517; lv517",
    "24/7.0; 480dpi; 1080x1920; samsung; SAMSUNG-SM-G930A; heroqlteatt; qcom",
    "23/6.0; 320dpi; 720x1280; Infinix; Infinix_X521; Infinix-X521; mt6735",
    "24/7.0; 320dpi; 720x1280; samsung; SM-J530FM; j5y17lte; samsungexynos7870",
    "24/7.0; 640dpi; 1440x2768; samsung; SM-G950F; dreamlte; samsungexynos8895",
    "24/7.0; 640dpi; 1440x2560; samsung; SM-G930F; herolte; samsungexynos8890",
    "24/7.0; 480dpi; 1080x1812; HUAWEI; PRA-LA1; HWPRA-H; hi6250",
    "23/6.0; 320dpi; 720x1187; LGE/lge; LG-K350; mm1v; mm1v",
    "23/6.0; 320dpi; 720x1280; TCL; 5023F; Pixi4PlusPower; mt6580",
    "17/4.2.2; 240dpi; 480x800; samsung; GT-I9060; baffinlite; ja_baffinlite",
    "24/7.0; 420dpi; 1080x1920; samsung/Verizon; SM-N920V; nobleltevzw; samsungexynos7420",
    "24/7.0; 480dpi; 1080x1920; samsung; SM-G930T; heroqltetmo; qcom",
    "24/7.0; 480dpi; 1080x1920; samsung; SM-G935T; hero2qltetmo; qcom",
    "24/7.0; 320dpi; 720x1280; samsung; SM-G570F; on5xelte; samsungexynos7570",
    "24/7.0; 480dpi; 1080x1798; LGE/MetroPCS; LGMP450; sf340n; sf340",
    "24/7.0; 320dpi; 720x1187; LGE/MetroPCS; LGMS210; lv3; lv3",
    "19/4.4.4; 320dpi; 720x1280; samsung; GT-I9300I; s3ve3gds; qcom",
    "24/7.0; 480dpi; 1080x1812; HUAWEI/HONOR; NEM-L51; HNNEM-H; hi6250",
    "24/7.0; 640dpi; 1440x2560; samsung/Verizon; SM-G920V; zerofltevzw; samsungexynos7420",
    "24/7.0; 420dpi; 1080x1920; samsung; SM-A720F; a7y17lte; samsungexynos7880",
    "22/5.1; 240dpi; 480x854; OPPO; 1201; 1201; mt6582",
    "23/6.0.1; 320dpi; 1600x2560; samsung; SM-T805; chagalllte; universal5420",
    "18/4.3; 480dpi; 1080x1776; Sony; C6603; C6603; qcom",
    "23/6.0.1; 320dpi; 720x1280; samsung; SM-A500H; a53g; qcom",
    "25/7.1.1; 480dpi; 1080x1776; Sony; F5121; F5121; qcom",
    "23/6.0; 320dpi; 720x1280; vivo; vivo 1713; 1601; mt6755",
    "19/4.4.2; 240dpi; 480x800; HUAWEI; HUAWEI Y336-U02; HWY336-U; sc8830",
    "23/6.0.1; 320dpi; 720x1280; samsung; SM-J700F; j7elte; samsungexynos7580",
    "19/4.4.2; 240dpi; 540x960; samsung; GT-I9195; serranolte; qcom",
    "19/4.4.4; 213dpi; 480x854; orange; orange fova; orangefova; qcom",
    "24/7.0; 480dpi; 1080x1920; samsung; SM-A710F; a7xelte; samsungexynos7580",
    "19/4.4.2; 320dpi; 720x1280; samsung; SM-G7102; ms013g; qcom",
    "24/7.0; 480dpi; 1080x1776; Sony; F3212; F3212; mt6755",
    "22/5.1; 320dpi; 720x1184; HUAWEI/HONOR; TIT-L01; HWTIT-L6735; mt6735",
    "24/7.0; 240dpi; 480x854; motorola; Moto C; watson; mt6580",
    "23/6.0.1; 320dpi; 720x1280; samsung; SM-A500G; a5lte; qcom",
    "24/7.0; 320dpi; 720x1184; asus; ASUS_X008D; ASUS_X008; mt6735",
    "24/7.0; 320dpi; 720x1280; samsung; SM-J330F; j3y17lte; samsungexynos7570",
    "25/7.1.1; 320dpi; 720x1280; samsung; SM-J510FN; j5xnlte; qcom",
    "23/6.0.1; 640dpi; 1532x2560; samsung; SM-N915FY; tblte; qcom",
    "24/7.0; 480dpi; 1080x1920; Xiaomi; MI 5; gemini; qcom",
    "24/7.0; 480dpi; 1080x1794; HUAWEI/HONOR; FRD-L09; HWFRD; hi3650",
    "24/7.0; 480dpi; 1080x1812; HUAWEI/HONOR; PRA-TL10; HWPRA-H; hi6250",
    "24/7.0; 480dpi; 1080x1920; samsung/Verizon; SM-G930V; heroqltevzw; qcom",
    "23/6.0; 320dpi; 720x1280; TCL; 5080Q; shite; mt6735",
    "25/7.1.1; 480dpi; 1080x1920; Xiaomi; MI 6; sagit; qcom",
    "24/7.0; 480dpi; 1080x1920; HUAWEI/HONOR; STF-L09; HWSTF; hi3660",
    "24/7.0; 420dpi; 1080x1920; samsung; SM-J730FM; j7y17lte; samsungexynos7870",
    "22/5.1.1; 320dpi; 720x1280; Xiaomi; Redmi 3; ido; qcom",
    "25/7.1.2; 432dpi; 1080x1920; OnePlus; unknown; OnePlus2; qcom",
    "25/7.1.1; 480dpi; 1080x1920; ZTE; Z982; crocus; qcom",
    "24/7.0; 480dpi; 1080x2076; samsung; SM-G950U1; dreamqlteue; qcom",
    "25/7.1.2; 640dpi; 1440x2712; LGE/lge; VS996; joan; joan",
    "25/7.1.1; 320dpi; 720x1280; motorola; Moto E (4) Plus; nicklaus_f; mt6735",
    "23/6.0.1; 320dpi; 720x1184; motorola; MotoG3; osprs; qcom",
    "23/6.0.1; 480dpi; 1080x1920; LENOVO/Lenovo; Lenovo K53a48; K53a48; qcom",
    "24/7.0; 560dpi; 1440x2792; samsung; SM-G955F; dream2lte; samsungexynos8895",
    "24/7.0; 480dpi; 1080x2076; samsung; SM-G955F; dream2lte; samsungexynos8895",
    "23/6.0.1; 440dpi; 1080x1920; Xiaomi; MI MAX; hydrogen; qcom",
    "25/7.1.1; 280dpi; 720x1396; samsung; SM-N950F; greatlte; samsungexynos8895",
    "26/8.0.0; 420dpi; 1080x2094; samsung; SM-G950F; dreamlte; samsungexynos8895",
    "23/6.0.1; 320dpi; 720x1184; HTC/htc; HTC Desire 820 dual sim; htc_a51dtul; qcom",
    "23/6.0; 320dpi; 720x1192; HUAWEI; MYA-L11; HWMYA-L6737; mt6735",
    "23/6.0.1; 480dpi; 1080x1920; samsung; SM-G610M; on7xelte; samsungexynos7870",
    "24/7.0; 480dpi; 1080x1920; samsung; SM-G930W8; heroltebmc; samsungexynos8890",
    "24/7.0; 280dpi; 720x1280; samsung; SM-J530G; j5y17lte; samsungexynos7870",
    "23/6.0; 320dpi; 720x1208; HUAWEI/Huawei; ALE-L21; hwALE-H; hi6210sft",
    "23/6.0; 240dpi; 480x782; LG Electronics/lge; LG-X230; mlv1; mt6735",
    "26/8.0.0; 480dpi; 1080x1920; Xiaomi/xiaomi; Mi A1; tissrout; qcom",
    "19/4.4.4; 240dpi; 540x888; Sony; E2006; E2006; mt6752",
    "24/7.0; 480dpi; 1080x1920; samsung/Verizon; SM-G935V; hero2qltevzw; qcom",
    "22/5.1.1; 240dpi; 480x800; samsung; SM-J105B; j1mini3g; sc8830",
    "23/6.0.1; 480dpi; 1080x1920; ZTE; Z981; urd; qcom",
    "24/7.0; 280dpi; 720x1396; samsung; SM-G950F; dreamlte; samsungexynos8895",
    "24/7.0; 480dpi; 1080x1794; HUAWEI; EVA-L09; HWEVA; hi3650",
    "24/7.0; 320dpi; 720x1280; samsung; SM-G930F; herolte; samsungexynos8890",
    "24/7.0; 420dpi; 1080x1920; samsung; SM-G930F; herolte; samsungexynos8890",
    "25/7.1.1; 440dpi; 1920x1080; Xiaomi; MI MAX 2; oxygen; qcom",
    "24/7.0; 480dpi; 1080x1812; HUAWEI; WAS-LX1A; HWWAS-H; hi6250",
    "23/6.0.1; 320dpi; 720x1280; samsung; SM-S550TL; on5ltetfntmo; universal3475",
    "23/6.0.1; 240dpi; 480x854; ZTE; Z798BL; stark; qcom",
    "27/8.1.0; 476dpi; 1440x2417; Google/google; Pixel XL; marlin; marlin",
    "25/7.1.1; 480dpi; 1080x1776; Sony; E6853; E6853; qcom",
    "26/8.0.0; 420dpi; 1080x1920; OnePlus; ONEPLUS A5000; OnePlus5; qcom",
    "24/7.0; 640dpi; 1440x2768; samsung; SM-G950W; dreamqltecan; qcom",
    "23/6.0; 320dpi; 720x1184; motorola; XT1072; thea; qcom",
    "25/7.1.1; 560dpi; 1440x2792; samsung; SM-N950F; greatlte; samsungexynos8895",
    "25/7.1.1; 480dpi; 1080x2004; LGE/lge; LG-M700; mh; mh",
    "21/5.0.2; 480dpi; 1080x1920; Xiaomi; Redmi Note 2; hermes; mt6795",
    "24/7.0; 280dpi; 720x1396; samsung; SM-G955F; dream2lte; samsungexynos8895",
    "24/7.0; 420dpi; 2094x1080; samsung; SM-G950F; dreamlte; samsungexynos8895",
    "24/7.0; 320dpi; 720x1280; motorola; Moto C Plus; panell_d; mt6735",
    "19/4.4.2; 240dpi; 480x800; WIKO; BLOOM; wiko; mt6582",
    "24/7.0; 640dpi; 1440x2768; samsung; SM-G955F; dream2lte; samsungexynos8895",
    "26/8.0.0; 408dpi; 1080x1920; Xiaomi/xiaomi; Mi A1; tissrout; qcom",
    "24/7.0; 420dpi; 1080x2094; samsung; SM-G950F; dreamlte; samsungexynos8895",
    "24/7.0; 280dpi; 1396x720; samsung; SM-G955F; dream2lte; samsungexynos8895",
    "24/7.0; 320dpi; 720x1280; samsung; SM-G935F; hero2lte; samsungexynos8890",
    "24/7.0; 288dpi; 1080x1834; HUAWEI; HUAWEI NMO-L31; HWNMO-H; hi6250",
    "25/7.1.1; 480dpi; 1080x2076; samsung; SM-N950F; greatlte; samsungexynos8895",
    "23/unknown; 480dpi; 1080x1836; unknown; unknown; unknown; hi3635",
    "24/7.0; 640dpi; 1440x2560; samsung; SM-G920I; zeroflte; samsungexynos7420",
    "27/8.1.0; 560dpi; 2392x1440; Google/google; Pixel XL; marlin; marlin",
    "24/7.0; 320dpi; 720x1208; HUAWEI; TRT-AL00A; HWTRT-Q; qcom",
    "22/5.1; 320dpi; 720x1280; Coolpad; CP8298_I00; CP8298_I00; mt6735",
    "24/7.0; 420dpi; 1080x1920; samsung; SAMSUNG-SM-N920A; noblelteatt; samsungexynos7420)",
];

const _: () = assert!(!GOOD_DEVICES.is_empty());

/// Pick a uniformly random known-good device
pub fn random_good_device() -> &'static str {
    let index = rand::rng().random_range(0..GOOD_DEVICES.len());
    GOOD_DEVICES[index]
}

/// Every known-good device
pub fn all_good_devices() -> &'static [&'static str] {
    GOOD_DEVICES
}

/// Exact, case-sensitive membership test
pub fn is_good_device(device_string: &str) -> bool {
    GOOD_DEVICES.contains(&device_string)
}
