//! Built-in character table
//!
//! Display order is alphabetical by identifier. The order carries no meaning for
//! filtering, selection or shuffling.

use crate::catalog::entity::{
    Character,
    Element::{Anemo, Cryo, Dendro, Electro, Geo, Hydro, Pyro},
    Gender::{Female, Male},
    Rarity::{Five, Four},
    Weapon::{Bow, Catalyst, Claymore, Polearm, Sword},
};

/// Every playable character known to the tool
pub const CHARACTERS: &[Character] = &[
    Character {
        id: "albedo",
        name: "Albedo",
        short_name: "Albedo",
        elements: &[Geo],
        genders: &[Male],
        weapon: Sword,
        rarity: Five,
    },
    Character {
        id: "alhaitham",
        name: "Alhaitham",
        short_name: "Alhaitham",
        elements: &[Dendro],
        genders: &[Male],
        weapon: Sword,
        rarity: Five,
    },
    Character {
        id: "aloy",
        name: "Aloy",
        short_name: "Aloy",
        elements: &[Cryo],
        genders: &[Female],
        weapon: Bow,
        rarity: Five,
    },
    Character {
        id: "amber",
        name: "Amber",
        short_name: "Amber",
        elements: &[Pyro],
        genders: &[Female],
        weapon: Bow,
        rarity: Four,
    },
    Character {
        id: "arataki-itto",
        name: "Arataki Itto",
        short_name: "Itto",
        elements: &[Geo],
        genders: &[Male],
        weapon: Claymore,
        rarity: Five,
    },
    Character {
        id: "baizhu",
        name: "Baizhu",
        short_name: "Baizhu",
        elements: &[Dendro],
        genders: &[Male],
        weapon: Catalyst,
        rarity: Five,
    },
    Character {
        id: "barbara",
        name: "Barbara",
        short_name: "Barbara",
        elements: &[Hydro],
        genders: &[Female],
        weapon: Catalyst,
        rarity: Four,
    },
    Character {
        id: "beidou",
        name: "Beidou",
        short_name: "Beidou",
        elements: &[Electro],
        genders: &[Female],
        weapon: Claymore,
        rarity: Four,
    },
    Character {
        id: "bennett",
        name: "Bennett",
        short_name: "Bennett",
        elements: &[Pyro],
        genders: &[Male],
        weapon: Sword,
        rarity: Four,
    },
    Character {
        id: "candace",
        name: "Candace",
        short_name: "Candace",
        elements: &[Hydro],
        genders: &[Female],
        weapon: Polearm,
        rarity: Four,
    },
    Character {
        id: "chongyun",
        name: "Chongyun",
        short_name: "Chongyun",
        elements: &[Cryo],
        genders: &[Male],
        weapon: Claymore,
        rarity: Four,
    },
    Character {
        id: "collei",
        name: "Collei",
        short_name: "Collei",
        elements: &[Dendro],
        genders: &[Female],
        weapon: Bow,
        rarity: Four,
    },
    Character {
        id: "cyno",
        name: "Cyno",
        short_name: "Cyno",
        elements: &[Electro],
        genders: &[Male],
        weapon: Polearm,
        rarity: Five,
    },
    Character {
        id: "dehya",
        name: "Dehya",
        short_name: "Dehya",
        elements: &[Pyro],
        genders: &[Female],
        weapon: Claymore,
        rarity: Five,
    },
    Character {
        id: "diluc",
        name: "Diluc",
        short_name: "Diluc",
        elements: &[Pyro],
        genders: &[Male],
        weapon: Claymore,
        rarity: Five,
    },
    Character {
        id: "diona",
        name: "Diona",
        short_name: "Diona",
        elements: &[Cryo],
        genders: &[Female],
        weapon: Bow,
        rarity: Four,
    },
    Character {
        id: "dori",
        name: "Dori",
        short_name: "Dori",
        elements: &[Electro],
        genders: &[Female],
        weapon: Claymore,
        rarity: Four,
    },
    Character {
        id: "eula",
        name: "Eula",
        short_name: "Eula",
        elements: &[Cryo],
        genders: &[Female],
        weapon: Claymore,
        rarity: Five,
    },
    Character {
        id: "faruzan",
        name: "Faruzan",
        short_name: "Faruzan",
        elements: &[Anemo],
        genders: &[Female],
        weapon: Bow,
        rarity: Four,
    },
    Character {
        id: "fischl",
        name: "Fischl",
        short_name: "Fischl",
        elements: &[Electro],
        genders: &[Female],
        weapon: Bow,
        rarity: Four,
    },
    Character {
        id: "freminet",
        name: "Freminet",
        short_name: "Freminet",
        elements: &[Cryo],
        genders: &[Male],
        weapon: Claymore,
        rarity: Four,
    },
    Character {
        id: "ganyu",
        name: "Ganyu",
        short_name: "Ganyu",
        elements: &[Cryo],
        genders: &[Female],
        weapon: Bow,
        rarity: Five,
    },
    Character {
        id: "gorou",
        name: "Gorou",
        short_name: "Gorou",
        elements: &[Geo],
        genders: &[Male],
        weapon: Bow,
        rarity: Four,
    },
    Character {
        id: "hu-tao",
        name: "Hu Tao",
        short_name: "Hu Tao",
        elements: &[Pyro],
        genders: &[Female],
        weapon: Polearm,
        rarity: Five,
    },
    Character {
        id: "jean",
        name: "Jean",
        short_name: "Jean",
        elements: &[Anemo],
        genders: &[Female],
        weapon: Sword,
        rarity: Five,
    },
    Character {
        id: "kaedehara-kazuha",
        name: "Kaedehara Kazuha",
        short_name: "Kazuha",
        elements: &[Anemo],
        genders: &[Male],
        weapon: Sword,
        rarity: Five,
    },
    Character {
        id: "kaeya",
        name: "Kaeya",
        short_name: "Kaeya",
        elements: &[Cryo],
        genders: &[Male],
        weapon: Sword,
        rarity: Four,
    },
    Character {
        id: "kamisato-ayaka",
        name: "Kamisato Ayaka",
        short_name: "Ayaka",
        elements: &[Cryo],
        genders: &[Female],
        weapon: Sword,
        rarity: Five,
    },
    Character {
        id: "kamisato-ayato",
        name: "Kamisato Ayato",
        short_name: "Ayato",
        elements: &[Hydro],
        genders: &[Male],
        weapon: Sword,
        rarity: Five,
    },
    Character {
        id: "kaveh",
        name: "Kaveh",
        short_name: "Kaveh",
        elements: &[Dendro],
        genders: &[Male],
        weapon: Claymore,
        rarity: Four,
    },
    Character {
        id: "keqing",
        name: "Keqing",
        short_name: "Keqing",
        elements: &[Electro],
        genders: &[Female],
        weapon: Sword,
        rarity: Five,
    },
    Character {
        id: "kirara",
        name: "Kirara",
        short_name: "Kirara",
        elements: &[Dendro],
        genders: &[Female],
        weapon: Sword,
        rarity: Four,
    },
    Character {
        id: "klee",
        name: "Klee",
        short_name: "Klee",
        elements: &[Pyro],
        genders: &[Female],
        weapon: Catalyst,
        rarity: Five,
    },
    Character {
        id: "kujou-sara",
        name: "Kujou Sara",
        short_name: "Sara",
        elements: &[Electro],
        genders: &[Female],
        weapon: Bow,
        rarity: Four,
    },
    Character {
        id: "kuki-shinobu",
        name: "Kuki Shinobu",
        short_name: "Kuki",
        elements: &[Electro],
        genders: &[Female],
        weapon: Sword,
        rarity: Four,
    },
    Character {
        id: "layla",
        name: "Layla",
        short_name: "Layla",
        elements: &[Cryo],
        genders: &[Female],
        weapon: Sword,
        rarity: Four,
    },
    Character {
        id: "lisa",
        name: "Lisa",
        short_name: "Lisa",
        elements: &[Electro],
        genders: &[Female],
        weapon: Catalyst,
        rarity: Four,
    },
    Character {
        id: "lynette",
        name: "Lynette",
        short_name: "Lynette",
        elements: &[Anemo],
        genders: &[Female],
        weapon: Sword,
        rarity: Four,
    },
    Character {
        id: "lyney",
        name: "Lyney",
        short_name: "Lyney",
        elements: &[Pyro],
        genders: &[Male],
        weapon: Bow,
        rarity: Five,
    },
    Character {
        id: "mika",
        name: "Mika",
        short_name: "Mika",
        elements: &[Cryo],
        genders: &[Male],
        weapon: Polearm,
        rarity: Four,
    },
    Character {
        id: "mona",
        name: "Mona",
        short_name: "Mona",
        elements: &[Hydro],
        genders: &[Female],
        weapon: Catalyst,
        rarity: Five,
    },
    Character {
        id: "nahida",
        name: "Nahida",
        short_name: "Nahida",
        elements: &[Dendro],
        genders: &[Female],
        weapon: Catalyst,
        rarity: Five,
    },
    Character {
        id: "neuvillette",
        name: "Neuvillette",
        short_name: "Neuvillette",
        elements: &[Hydro],
        genders: &[Male],
        weapon: Catalyst,
        rarity: Five,
    },
    Character {
        id: "nilou",
        name: "Nilou",
        short_name: "Nilou",
        elements: &[Hydro],
        genders: &[Female],
        weapon: Sword,
        rarity: Five,
    },
    Character {
        id: "ningguang",
        name: "Ningguang",
        short_name: "Ningguang",
        elements: &[Geo],
        genders: &[Female],
        weapon: Catalyst,
        rarity: Four,
    },
    Character {
        id: "noelle",
        name: "Noelle",
        short_name: "Noelle",
        elements: &[Geo],
        genders: &[Female],
        weapon: Claymore,
        rarity: Four,
    },
    Character {
        id: "qiqi",
        name: "Qiqi",
        short_name: "Qiqi",
        elements: &[Cryo],
        genders: &[Female],
        weapon: Sword,
        rarity: Five,
    },
    Character {
        id: "raiden-shogun",
        name: "Raiden Shogun",
        short_name: "Raiden",
        elements: &[Electro],
        genders: &[Female],
        weapon: Polearm,
        rarity: Five,
    },
    Character {
        id: "razor",
        name: "Razor",
        short_name: "Razor",
        elements: &[Electro],
        genders: &[Male],
        weapon: Claymore,
        rarity: Four,
    },
    Character {
        id: "rosaria",
        name: "Rosaria",
        short_name: "Rosaria",
        elements: &[Cryo],
        genders: &[Female],
        weapon: Polearm,
        rarity: Four,
    },
    Character {
        id: "sangonomiya-kokomi",
        name: "Sangonomiya Kokomi",
        short_name: "Kokomi",
        elements: &[Hydro],
        genders: &[Female],
        weapon: Catalyst,
        rarity: Five,
    },
    Character {
        id: "sayu",
        name: "Sayu",
        short_name: "Sayu",
        elements: &[Anemo],
        genders: &[Female],
        weapon: Claymore,
        rarity: Four,
    },
    Character {
        id: "shenhe",
        name: "Shenhe",
        short_name: "Shenhe",
        elements: &[Cryo],
        genders: &[Female],
        weapon: Polearm,
        rarity: Five,
    },
    Character {
        id: "shikanoin-heizou",
        name: "Shikanoin Heizou",
        short_name: "Heizou",
        elements: &[Anemo],
        genders: &[Male],
        weapon: Catalyst,
        rarity: Four,
    },
    Character {
        id: "sucrose",
        name: "Sucrose",
        short_name: "Sucrose",
        elements: &[Anemo],
        genders: &[Female],
        weapon: Catalyst,
        rarity: Four,
    },
    Character {
        id: "tartaglia",
        name: "Tartaglia",
        short_name: "Childe",
        elements: &[Hydro],
        genders: &[Male],
        weapon: Bow,
        rarity: Five,
    },
    Character {
        id: "thoma",
        name: "Thoma",
        short_name: "Thoma",
        elements: &[Pyro],
        genders: &[Male],
        weapon: Polearm,
        rarity: Four,
    },
    Character {
        id: "tighnari",
        name: "Tighnari",
        short_name: "Tighnari",
        elements: &[Dendro],
        genders: &[Male],
        weapon: Bow,
        rarity: Five,
    },
    Character {
        id: "traveler",
        name: "Traveler",
        short_name: "Traveler",
        elements: &[Anemo, Geo, Electro, Dendro, Hydro],
        genders: &[Male, Female],
        weapon: Sword,
        rarity: Five,
    },
    Character {
        id: "venti",
        name: "Venti",
        short_name: "Venti",
        elements: &[Anemo],
        genders: &[Male],
        weapon: Bow,
        rarity: Five,
    },
    Character {
        id: "wanderer",
        name: "Wanderer",
        short_name: "Wanderer",
        elements: &[Anemo],
        genders: &[Male],
        weapon: Catalyst,
        rarity: Five,
    },
    Character {
        id: "xiangling",
        name: "Xiangling",
        short_name: "Xiangling",
        elements: &[Pyro],
        genders: &[Female],
        weapon: Polearm,
        rarity: Four,
    },
    Character {
        id: "xiao",
        name: "Xiao",
        short_name: "Xiao",
        elements: &[Anemo],
        genders: &[Male],
        weapon: Polearm,
        rarity: Five,
    },
    Character {
        id: "xingqiu",
        name: "Xingqiu",
        short_name: "Xingqiu",
        elements: &[Hydro],
        genders: &[Male],
        weapon: Sword,
        rarity: Four,
    },
    Character {
        id: "xinyan",
        name: "Xinyan",
        short_name: "Xinyan",
        elements: &[Pyro],
        genders: &[Female],
        weapon: Claymore,
        rarity: Four,
    },
    Character {
        id: "yae-miko",
        name: "Yae Miko",
        short_name: "Yae",
        elements: &[Electro],
        genders: &[Female],
        weapon: Catalyst,
        rarity: Five,
    },
    Character {
        id: "yanfei",
        name: "Yanfei",
        short_name: "Yanfei",
        elements: &[Pyro],
        genders: &[Female],
        weapon: Catalyst,
        rarity: Four,
    },
    Character {
        id: "yaoyao",
        name: "Yaoyao",
        short_name: "Yaoyao",
        elements: &[Dendro],
        genders: &[Female],
        weapon: Polearm,
        rarity: Four,
    },
    Character {
        id: "yelan",
        name: "Yelan",
        short_name: "Yelan",
        elements: &[Hydro],
        genders: &[Female],
        weapon: Bow,
        rarity: Five,
    },
    Character {
        id: "yoimiya",
        name: "Yoimiya",
        short_name: "Yoimiya",
        elements: &[Pyro],
        genders: &[Female],
        weapon: Bow,
        rarity: Five,
    },
    Character {
        id: "yun-jin",
        name: "Yun Jin",
        short_name: "Yun Jin",
        elements: &[Geo],
        genders: &[Female],
        weapon: Polearm,
        rarity: Four,
    },
    Character {
        id: "zhongli",
        name: "Zhongli",
        short_name: "Zhongli",
        elements: &[Geo],
        genders: &[Male],
        weapon: Polearm,
        rarity: Five,
    },
];
