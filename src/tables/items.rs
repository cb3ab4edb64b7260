//! Held item names. Empty entries are indices the games never use.

/// Gold, Silver and Crystal item indices.
pub static GEN2_ITEM_NAMES: [&str; 256] = [
    "",
    "Master Ball",
    "Ultra Ball",
    "BrightPowder",
    "Great Ball",
    "Poké Ball",
    "",
    "Bicycle",
    "Moon Stone",
    "Antidote",
    "Burn Heal",
    "Ice Heal",
    "Awakening",
    "Parlyz Heal",
    "Full Restore",
    "Max Potion",
    "Hyper Potion",
    "Super Potion",
    "Potion",
    "Escape Rope",
    "Repel",
    "Max Elixer",
    "Fire Stone",
    "Thunderstone",
    "Water Stone",
    "",
    "HP Up",
    "Protein",
    "Iron",
    "Carbos",
    "Lucky Punch",
    "Calcium",
    "Rare Candy",
    "X Accuracy",
    "Leaf Stone",
    "Metal Powder",
    "Nugget",
    "Poké Doll",
    "Full Heal",
    "Revive",
    "Max Revive",
    "Guard Spec.",
    "Super Repel",
    "Max Repel",
    "Dire Hit",
    "",
    "Fresh Water",
    "Soda Pop",
    "Lemonade",
    "X Attack",
    "",
    "X Defend",
    "X Speed",
    "X Special",
    "Coin Case",
    "Itemfinder",
    "",
    "Exp. Share",
    "Old Rod",
    "Good Rod",
    "Silver Leaf",
    "Super Rod",
    "PP Up",
    "Ether",
    "Max Ether",
    "Elixer",
    "Red Scale",
    "SecretPotion",
    "S.S. Ticket",
    "Mystery Egg",
    "Clear Bell",
    "Silver Wing",
    "Moomoo Milk",
    "Quick Claw",
    "PSNCureBerry",
    "Gold Leaf",
    "Soft Sand",
    "Sharp Beak",
    "PRZCureBerry",
    "Burnt Berry",
    "Ice Berry",
    "Poison Barb",
    "King's Rock",
    "Bitter Berry",
    "Mint Berry",
    "Red Apricorn",
    "TinyMushroom",
    "Big Mushroom",
    "SilverPowder",
    "Blu Apricorn",
    "",
    "Amulet Coin",
    "Ylw Apricorn",
    "Grn Apricorn",
    "Cleanse Tag",
    "Mystic Water",
    "TwistedSpoon",
    "Wht Apricorn",
    "Blackbelt",
    "Blk Apricorn",
    "",
    "Pnk Apricorn",
    "BlackGlasses",
    "SlowpokeTail",
    "Pink Bow",
    "Stick",
    "Smoke Ball",
    "NeverMeltIce",
    "Magnet",
    "MiracleBerry",
    "Pearl",
    "Big Pearl",
    "Everstone",
    "Spell Tag",
    "RageCandyBar",
    "GS Ball",
    "Blue Card",
    "Miracle Seed",
    "Thick Club",
    "Focus Band",
    "",
    "EnergyPowder",
    "Energy Root",
    "Heal Powder",
    "Revival Herb",
    "Hard Stone",
    "Lucky Egg",
    "Card Key",
    "Machine Part",
    "Egg Ticket",
    "Lost Item",
    "Stardust",
    "Star Piece",
    "Basement Key",
    "Pass",
    "",
    "",
    "",
    "Charcoal",
    "Berry Juice",
    "Scope Lens",
    "",
    "",
    "Metal Coat",
    "Dragon Fang",
    "",
    "Leftovers",
    "",
    "",
    "",
    "MysteryBerry",
    "Dragon Scale",
    "Berserk Gene",
    "",
    "",
    "",
    "Sacred Ash",
    "Heavy Ball",
    "Flower Mail",
    "Level Ball",
    "Lure Ball",
    "Fast Ball",
    "",
    "Light Ball",
    "Friend Ball",
    "Moon Ball",
    "Love Ball",
    "Normal Box",
    "Gorgeous Box",
    "Sun Stone",
    "Polkadot Bow",
    "",
    "Up-Grade",
    "Berry",
    "Gold Berry",
    "SquirtBottle",
    "",
    "Park Ball",
    "Rainbow Wing",
    "",
    "Brick Piece",
    "Surf Mail",
    "Litebluemail",
    "Portraitmail",
    "Lovely Mail",
    "Eon Mail",
    "Morph Mail",
    "Bluesky Mail",
    "Music Mail",
    "Mirage Mail",
    "",
    "TM01",
    "TM02",
    "TM03",
    "TM04",
    "",
    "TM05",
    "TM06",
    "TM07",
    "TM08",
    "TM09",
    "TM10",
    "TM11",
    "TM12",
    "TM13",
    "TM14",
    "TM15",
    "TM16",
    "TM17",
    "TM18",
    "TM19",
    "TM20",
    "TM21",
    "TM22",
    "TM23",
    "TM24",
    "TM25",
    "TM26",
    "TM27",
    "TM28",
    "",
    "TM29",
    "TM30",
    "TM31",
    "TM32",
    "TM33",
    "TM34",
    "TM35",
    "TM36",
    "TM37",
    "TM38",
    "TM39",
    "TM40",
    "TM41",
    "TM42",
    "TM43",
    "TM44",
    "TM45",
    "TM46",
    "TM47",
    "TM48",
    "TM49",
    "TM50",
    "HM01",
    "HM02",
    "HM03",
    "HM04",
    "HM05",
    "HM06",
    "HM07",
    "",
    "",
    "",
    "",
    "",
    "",
];

/// Ruby, Sapphire, Emerald, FireRed and LeafGreen item indices.
pub static GEN3_ITEM_NAMES: [&str; 377] = [
    "",
    "Master Ball",
    "Ultra Ball",
    "Great Ball",
    "Poké Ball",
    "Safari Ball",
    "Net Ball",
    "Dive Ball",
    "Nest Ball",
    "Repeat Ball",
    "Timer Ball",
    "Luxury Ball",
    "Premier Ball",
    "Potion",
    "Antidote",
    "Burn Heal",
    "Ice Heal",
    "Awakening",
    "Parlyz Heal",
    "Full Restore",
    "Max Potion",
    "Hyper Potion",
    "Super Potion",
    "Full Heal",
    "Revive",
    "Max Revive",
    "Fresh Water",
    "Soda Pop",
    "Lemonade",
    "Moomoo Milk",
    "EnergyPowder",
    "Energy Root",
    "Heal Powder",
    "Revival Herb",
    "Ether",
    "Max Ether",
    "Elixir",
    "Max Elixir",
    "Lava Cookie",
    "Blue Flute",
    "Yellow Flute",
    "Red Flute",
    "Black Flute",
    "White Flute",
    "Berry Juice",
    "Sacred Ash",
    "Shoal Salt",
    "Shoal Shell",
    "Red Shard",
    "Blue Shard",
    "Yellow Shard",
    "Green Shard",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "HP Up",
    "Protein",
    "Iron",
    "Carbos",
    "Calcium",
    "Rare Candy",
    "PP Up",
    "Zinc",
    "PP Max",
    "",
    "Guard Spec.",
    "Dire Hit",
    "X Attack",
    "X Defend",
    "X Speed",
    "X Accuracy",
    "X Special",
    "Poké Doll",
    "Fluffy Tail",
    "",
    "Super Repel",
    "Max Repel",
    "Escape Rope",
    "Repel",
    "",
    "",
    "",
    "",
    "",
    "",
    "Sun Stone",
    "Moon Stone",
    "Fire Stone",
    "Thunderstone",
    "Water Stone",
    "Leaf Stone",
    "",
    "",
    "",
    "",
    "TinyMushroom",
    "Big Mushroom",
    "",
    "Pearl",
    "Big Pearl",
    "Stardust",
    "Star Piece",
    "Nugget",
    "Heart Scale",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "Orange Mail",
    "Harbor Mail",
    "Glitter Mail",
    "Mech Mail",
    "Wood Mail",
    "Wave Mail",
    "Bead Mail",
    "Shadow Mail",
    "Tropic Mail",
    "Dream Mail",
    "Fab Mail",
    "Retro Mail",
    "Cheri Berry",
    "Chesto Berry",
    "Pecha Berry",
    "Rawst Berry",
    "Aspear Berry",
    "Leppa Berry",
    "Oran Berry",
    "Persim Berry",
    "Lum Berry",
    "Sitrus Berry",
    "Figy Berry",
    "Wiki Berry",
    "Mago Berry",
    "Aguav Berry",
    "Iapapa Berry",
    "Razz Berry",
    "Bluk Berry",
    "Nanab Berry",
    "Wepear Berry",
    "Pinap Berry",
    "Pomeg Berry",
    "Kelpsy Berry",
    "Qualot Berry",
    "Hondew Berry",
    "Grepa Berry",
    "Tamato Berry",
    "Cornn Berry",
    "Magost Berry",
    "Rabuta Berry",
    "Nomel Berry",
    "Spelon Berry",
    "Pamtre Berry",
    "Watmel Berry",
    "Durin Berry",
    "Belue Berry",
    "Liechi Berry",
    "Ganlon Berry",
    "Salac Berry",
    "Petaya Berry",
    "Apicot Berry",
    "Lansat Berry",
    "Starf Berry",
    "Enigma Berry",
    "",
    "",
    "",
    "BrightPowder",
    "White Herb",
    "Macho Brace",
    "Exp. Share",
    "Quick Claw",
    "Soothe Bell",
    "Mental Herb",
    "Choice Band",
    "King's Rock",
    "SilverPowder",
    "Amulet Coin",
    "Cleanse Tag",
    "Soul Dew",
    "DeepSeaTooth",
    "DeepSeaScale",
    "Smoke Ball",
    "Everstone",
    "Focus Band",
    "Lucky Egg",
    "Scope Lens",
    "Metal Coat",
    "Leftovers",
    "Dragon Scale",
    "Light Ball",
    "Soft Sand",
    "Hard Stone",
    "Miracle Seed",
    "BlackGlasses",
    "Black Belt",
    "Magnet",
    "Mystic Water",
    "Sharp Beak",
    "Poison Barb",
    "NeverMeltIce",
    "Spell Tag",
    "TwistedSpoon",
    "Charcoal",
    "Dragon Fang",
    "Silk Scarf",
    "Up-Grade",
    "Shell Bell",
    "Sea Incense",
    "Lax Incense",
    "Lucky Punch",
    "Metal Powder",
    "Thick Club",
    "Stick",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "Red Scarf",
    "Blue Scarf",
    "Pink Scarf",
    "Green Scarf",
    "Yellow Scarf",
    "Mach Bike",
    "Coin Case",
    "Itemfinder",
    "Old Rod",
    "Good Rod",
    "Super Rod",
    "S.S. Ticket",
    "Contest Pass",
    "",
    "Wailmer Pail",
    "Devon Goods",
    "Soot Sack",
    "Basement Key",
    "Acro Bike",
    "Pokéblock Case",
    "Letter",
    "Eon Ticket",
    "Red Orb",
    "Blue Orb",
    "Scanner",
    "Go-Goggles",
    "Meteorite",
    "Rm. 1 Key",
    "Rm. 2 Key",
    "Rm. 4 Key",
    "Rm. 6 Key",
    "Storage Key",
    "Root Fossil",
    "Claw Fossil",
    "Devon Scope",
    "TM01",
    "TM02",
    "TM03",
    "TM04",
    "TM05",
    "TM06",
    "TM07",
    "TM08",
    "TM09",
    "TM10",
    "TM11",
    "TM12",
    "TM13",
    "TM14",
    "TM15",
    "TM16",
    "TM17",
    "TM18",
    "TM19",
    "TM20",
    "TM21",
    "TM22",
    "TM23",
    "TM24",
    "TM25",
    "TM26",
    "TM27",
    "TM28",
    "TM29",
    "TM30",
    "TM31",
    "TM32",
    "TM33",
    "TM34",
    "TM35",
    "TM36",
    "TM37",
    "TM38",
    "TM39",
    "TM40",
    "TM41",
    "TM42",
    "TM43",
    "TM44",
    "TM45",
    "TM46",
    "TM47",
    "TM48",
    "TM49",
    "TM50",
    "HM01",
    "HM02",
    "HM03",
    "HM04",
    "HM05",
    "HM06",
    "HM07",
    "HM08",
    "",
    "",
    "Oak's Parcel",
    "Poké Flute",
    "Secret Key",
    "Bike Voucher",
    "Gold Teeth",
    "Old Amber",
    "Card Key",
    "Lift Key",
    "Helix Fossil",
    "Dome Fossil",
    "Silph Scope",
    "Bicycle",
    "Town Map",
    "VS Seeker",
    "Fame Checker",
    "TM Case",
    "Berry Pouch",
    "Teachy TV",
    "Tri-Pass",
    "Rainbow Pass",
    "Tea",
    "MysticTicket",
    "AuroraTicket",
    "Powder Jar",
    "Ruby",
    "Sapphire",
    "Magma Emblem",
    "Old Sea Map",
];
