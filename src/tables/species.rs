use super::{GrowthRate::*, SpeciesInfo};

/// National Pokédex order, starting at #001.
pub static SPECIES_NAMES: [&str; 386] = [
    "Bulbasaur",
    "Ivysaur",
    "Venusaur",
    "Charmander",
    "Charmeleon",
    "Charizard",
    "Squirtle",
    "Wartortle",
    "Blastoise",
    "Caterpie",
    "Metapod",
    "Butterfree",
    "Weedle",
    "Kakuna",
    "Beedrill",
    "Pidgey",
    "Pidgeotto",
    "Pidgeot",
    "Rattata",
    "Raticate",
    "Spearow",
    "Fearow",
    "Ekans",
    "Arbok",
    "Pikachu",
    "Raichu",
    "Sandshrew",
    "Sandslash",
    "Nidoran♀",
    "Nidorina",
    "Nidoqueen",
    "Nidoran♂",
    "Nidorino",
    "Nidoking",
    "Clefairy",
    "Clefable",
    "Vulpix",
    "Ninetales",
    "Jigglypuff",
    "Wigglytuff",
    "Zubat",
    "Golbat",
    "Oddish",
    "Gloom",
    "Vileplume",
    "Paras",
    "Parasect",
    "Venonat",
    "Venomoth",
    "Diglett",
    "Dugtrio",
    "Meowth",
    "Persian",
    "Psyduck",
    "Golduck",
    "Mankey",
    "Primeape",
    "Growlithe",
    "Arcanine",
    "Poliwag",
    "Poliwhirl",
    "Poliwrath",
    "Abra",
    "Kadabra",
    "Alakazam",
    "Machop",
    "Machoke",
    "Machamp",
    "Bellsprout",
    "Weepinbell",
    "Victreebel",
    "Tentacool",
    "Tentacruel",
    "Geodude",
    "Graveler",
    "Golem",
    "Ponyta",
    "Rapidash",
    "Slowpoke",
    "Slowbro",
    "Magnemite",
    "Magneton",
    "Farfetch'd",
    "Doduo",
    "Dodrio",
    "Seel",
    "Dewgong",
    "Grimer",
    "Muk",
    "Shellder",
    "Cloyster",
    "Gastly",
    "Haunter",
    "Gengar",
    "Onix",
    "Drowzee",
    "Hypno",
    "Krabby",
    "Kingler",
    "Voltorb",
    "Electrode",
    "Exeggcute",
    "Exeggutor",
    "Cubone",
    "Marowak",
    "Hitmonlee",
    "Hitmonchan",
    "Lickitung",
    "Koffing",
    "Weezing",
    "Rhyhorn",
    "Rhydon",
    "Chansey",
    "Tangela",
    "Kangaskhan",
    "Horsea",
    "Seadra",
    "Goldeen",
    "Seaking",
    "Staryu",
    "Starmie",
    "Mr. Mime",
    "Scyther",
    "Jynx",
    "Electabuzz",
    "Magmar",
    "Pinsir",
    "Tauros",
    "Magikarp",
    "Gyarados",
    "Lapras",
    "Ditto",
    "Eevee",
    "Vaporeon",
    "Jolteon",
    "Flareon",
    "Porygon",
    "Omanyte",
    "Omastar",
    "Kabuto",
    "Kabutops",
    "Aerodactyl",
    "Snorlax",
    "Articuno",
    "Zapdos",
    "Moltres",
    "Dratini",
    "Dragonair",
    "Dragonite",
    "Mewtwo",
    "Mew",
    "Chikorita",
    "Bayleef",
    "Meganium",
    "Cyndaquil",
    "Quilava",
    "Typhlosion",
    "Totodile",
    "Croconaw",
    "Feraligatr",
    "Sentret",
    "Furret",
    "Hoothoot",
    "Noctowl",
    "Ledyba",
    "Ledian",
    "Spinarak",
    "Ariados",
    "Crobat",
    "Chinchou",
    "Lanturn",
    "Pichu",
    "Cleffa",
    "Igglybuff",
    "Togepi",
    "Togetic",
    "Natu",
    "Xatu",
    "Mareep",
    "Flaaffy",
    "Ampharos",
    "Bellossom",
    "Marill",
    "Azumarill",
    "Sudowoodo",
    "Politoed",
    "Hoppip",
    "Skiploom",
    "Jumpluff",
    "Aipom",
    "Sunkern",
    "Sunflora",
    "Yanma",
    "Wooper",
    "Quagsire",
    "Espeon",
    "Umbreon",
    "Murkrow",
    "Slowking",
    "Misdreavus",
    "Unown",
    "Wobbuffet",
    "Girafarig",
    "Pineco",
    "Forretress",
    "Dunsparce",
    "Gligar",
    "Steelix",
    "Snubbull",
    "Granbull",
    "Qwilfish",
    "Scizor",
    "Shuckle",
    "Heracross",
    "Sneasel",
    "Teddiursa",
    "Ursaring",
    "Slugma",
    "Magcargo",
    "Swinub",
    "Piloswine",
    "Corsola",
    "Remoraid",
    "Octillery",
    "Delibird",
    "Mantine",
    "Skarmory",
    "Houndour",
    "Houndoom",
    "Kingdra",
    "Phanpy",
    "Donphan",
    "Porygon2",
    "Stantler",
    "Smeargle",
    "Tyrogue",
    "Hitmontop",
    "Smoochum",
    "Elekid",
    "Magby",
    "Miltank",
    "Blissey",
    "Raikou",
    "Entei",
    "Suicune",
    "Larvitar",
    "Pupitar",
    "Tyranitar",
    "Lugia",
    "Ho-Oh",
    "Celebi",
    "Treecko",
    "Grovyle",
    "Sceptile",
    "Torchic",
    "Combusken",
    "Blaziken",
    "Mudkip",
    "Marshtomp",
    "Swampert",
    "Poochyena",
    "Mightyena",
    "Zigzagoon",
    "Linoone",
    "Wurmple",
    "Silcoon",
    "Beautifly",
    "Cascoon",
    "Dustox",
    "Lotad",
    "Lombre",
    "Ludicolo",
    "Seedot",
    "Nuzleaf",
    "Shiftry",
    "Taillow",
    "Swellow",
    "Wingull",
    "Pelipper",
    "Ralts",
    "Kirlia",
    "Gardevoir",
    "Surskit",
    "Masquerain",
    "Shroomish",
    "Breloom",
    "Slakoth",
    "Vigoroth",
    "Slaking",
    "Nincada",
    "Ninjask",
    "Shedinja",
    "Whismur",
    "Loudred",
    "Exploud",
    "Makuhita",
    "Hariyama",
    "Azurill",
    "Nosepass",
    "Skitty",
    "Delcatty",
    "Sableye",
    "Mawile",
    "Aron",
    "Lairon",
    "Aggron",
    "Meditite",
    "Medicham",
    "Electrike",
    "Manectric",
    "Plusle",
    "Minun",
    "Volbeat",
    "Illumise",
    "Roselia",
    "Gulpin",
    "Swalot",
    "Carvanha",
    "Sharpedo",
    "Wailmer",
    "Wailord",
    "Numel",
    "Camerupt",
    "Torkoal",
    "Spoink",
    "Grumpig",
    "Spinda",
    "Trapinch",
    "Vibrava",
    "Flygon",
    "Cacnea",
    "Cacturne",
    "Swablu",
    "Altaria",
    "Zangoose",
    "Seviper",
    "Lunatone",
    "Solrock",
    "Barboach",
    "Whiscash",
    "Corphish",
    "Crawdaunt",
    "Baltoy",
    "Claydol",
    "Lileep",
    "Cradily",
    "Anorith",
    "Armaldo",
    "Feebas",
    "Milotic",
    "Castform",
    "Kecleon",
    "Shuppet",
    "Banette",
    "Duskull",
    "Dusclops",
    "Tropius",
    "Chimecho",
    "Absol",
    "Wynaut",
    "Snorunt",
    "Glalie",
    "Spheal",
    "Sealeo",
    "Walrein",
    "Clamperl",
    "Huntail",
    "Gorebyss",
    "Relicanth",
    "Luvdisc",
    "Bagon",
    "Shelgon",
    "Salamence",
    "Beldum",
    "Metang",
    "Metagross",
    "Regirock",
    "Regice",
    "Registeel",
    "Latias",
    "Latios",
    "Kyogre",
    "Groudon",
    "Rayquaza",
    "Jirachi",
    "Deoxys",
];

/// Growth rate, gender threshold and the two ability slots, national Pokédex order.
pub static SPECIES_INFO: [SpeciesInfo; 386] = [
    SpeciesInfo::new(MediumSlow, 31, [65, 0]), // Bulbasaur
    SpeciesInfo::new(MediumSlow, 31, [65, 0]), // Ivysaur
    SpeciesInfo::new(MediumSlow, 31, [65, 0]), // Venusaur
    SpeciesInfo::new(MediumSlow, 31, [66, 0]), // Charmander
    SpeciesInfo::new(MediumSlow, 31, [66, 0]), // Charmeleon
    SpeciesInfo::new(MediumSlow, 31, [66, 0]), // Charizard
    SpeciesInfo::new(MediumSlow, 31, [67, 0]), // Squirtle
    SpeciesInfo::new(MediumSlow, 31, [67, 0]), // Wartortle
    SpeciesInfo::new(MediumSlow, 31, [67, 0]), // Blastoise
    SpeciesInfo::new(MediumFast, 127, [19, 0]), // Caterpie
    SpeciesInfo::new(MediumFast, 127, [61, 0]), // Metapod
    SpeciesInfo::new(MediumFast, 127, [14, 0]), // Butterfree
    SpeciesInfo::new(MediumFast, 127, [19, 0]), // Weedle
    SpeciesInfo::new(MediumFast, 127, [61, 0]), // Kakuna
    SpeciesInfo::new(MediumFast, 127, [68, 0]), // Beedrill
    SpeciesInfo::new(MediumSlow, 127, [51, 0]), // Pidgey
    SpeciesInfo::new(MediumSlow, 127, [51, 0]), // Pidgeotto
    SpeciesInfo::new(MediumSlow, 127, [51, 0]), // Pidgeot
    SpeciesInfo::new(MediumFast, 127, [50, 62]), // Rattata
    SpeciesInfo::new(MediumFast, 127, [50, 62]), // Raticate
    SpeciesInfo::new(MediumFast, 127, [51, 0]), // Spearow
    SpeciesInfo::new(MediumFast, 127, [51, 0]), // Fearow
    SpeciesInfo::new(MediumFast, 127, [22, 61]), // Ekans
    SpeciesInfo::new(MediumFast, 127, [22, 61]), // Arbok
    SpeciesInfo::new(MediumFast, 127, [9, 0]), // Pikachu
    SpeciesInfo::new(MediumFast, 127, [9, 0]), // Raichu
    SpeciesInfo::new(MediumFast, 127, [8, 0]), // Sandshrew
    SpeciesInfo::new(MediumFast, 127, [8, 0]), // Sandslash
    SpeciesInfo::new(MediumSlow, 254, [38, 0]), // Nidoran♀
    SpeciesInfo::new(MediumSlow, 254, [38, 0]), // Nidorina
    SpeciesInfo::new(MediumSlow, 254, [38, 0]), // Nidoqueen
    SpeciesInfo::new(MediumSlow, 0, [38, 0]), // Nidoran♂
    SpeciesInfo::new(MediumSlow, 0, [38, 0]), // Nidorino
    SpeciesInfo::new(MediumSlow, 0, [38, 0]), // Nidoking
    SpeciesInfo::new(Fast, 191, [56, 0]), // Clefairy
    SpeciesInfo::new(Fast, 191, [56, 0]), // Clefable
    SpeciesInfo::new(MediumFast, 191, [18, 0]), // Vulpix
    SpeciesInfo::new(MediumFast, 191, [18, 0]), // Ninetales
    SpeciesInfo::new(Fast, 191, [56, 0]), // Jigglypuff
    SpeciesInfo::new(Fast, 191, [56, 0]), // Wigglytuff
    SpeciesInfo::new(MediumFast, 127, [39, 0]), // Zubat
    SpeciesInfo::new(MediumFast, 127, [39, 0]), // Golbat
    SpeciesInfo::new(MediumSlow, 127, [34, 0]), // Oddish
    SpeciesInfo::new(MediumSlow, 127, [34, 0]), // Gloom
    SpeciesInfo::new(MediumSlow, 127, [34, 0]), // Vileplume
    SpeciesInfo::new(MediumFast, 127, [27, 0]), // Paras
    SpeciesInfo::new(MediumFast, 127, [27, 0]), // Parasect
    SpeciesInfo::new(MediumFast, 127, [14, 0]), // Venonat
    SpeciesInfo::new(MediumFast, 127, [19, 0]), // Venomoth
    SpeciesInfo::new(MediumFast, 127, [8, 71]), // Diglett
    SpeciesInfo::new(MediumFast, 127, [8, 71]), // Dugtrio
    SpeciesInfo::new(MediumFast, 127, [53, 0]), // Meowth
    SpeciesInfo::new(MediumFast, 127, [7, 0]), // Persian
    SpeciesInfo::new(MediumFast, 127, [6, 13]), // Psyduck
    SpeciesInfo::new(MediumFast, 127, [6, 13]), // Golduck
    SpeciesInfo::new(MediumFast, 127, [72, 0]), // Mankey
    SpeciesInfo::new(MediumFast, 127, [72, 0]), // Primeape
    SpeciesInfo::new(Slow, 63, [22, 18]), // Growlithe
    SpeciesInfo::new(Slow, 63, [22, 18]), // Arcanine
    SpeciesInfo::new(MediumSlow, 127, [11, 6]), // Poliwag
    SpeciesInfo::new(MediumSlow, 127, [11, 6]), // Poliwhirl
    SpeciesInfo::new(MediumSlow, 127, [11, 6]), // Poliwrath
    SpeciesInfo::new(MediumSlow, 63, [28, 39]), // Abra
    SpeciesInfo::new(MediumSlow, 63, [28, 39]), // Kadabra
    SpeciesInfo::new(MediumSlow, 63, [28, 39]), // Alakazam
    SpeciesInfo::new(MediumSlow, 63, [62, 0]), // Machop
    SpeciesInfo::new(MediumSlow, 63, [62, 0]), // Machoke
    SpeciesInfo::new(MediumSlow, 63, [62, 0]), // Machamp
    SpeciesInfo::new(MediumSlow, 127, [34, 0]), // Bellsprout
    SpeciesInfo::new(MediumSlow, 127, [34, 0]), // Weepinbell
    SpeciesInfo::new(MediumSlow, 127, [34, 0]), // Victreebel
    SpeciesInfo::new(Slow, 127, [29, 64]), // Tentacool
    SpeciesInfo::new(Slow, 127, [29, 64]), // Tentacruel
    SpeciesInfo::new(MediumSlow, 127, [69, 5]), // Geodude
    SpeciesInfo::new(MediumSlow, 127, [69, 5]), // Graveler
    SpeciesInfo::new(MediumSlow, 127, [69, 5]), // Golem
    SpeciesInfo::new(MediumFast, 127, [50, 18]), // Ponyta
    SpeciesInfo::new(MediumFast, 127, [50, 18]), // Rapidash
    SpeciesInfo::new(MediumFast, 127, [12, 20]), // Slowpoke
    SpeciesInfo::new(MediumFast, 127, [12, 20]), // Slowbro
    SpeciesInfo::new(MediumFast, 255, [42, 5]), // Magnemite
    SpeciesInfo::new(MediumFast, 255, [42, 5]), // Magneton
    SpeciesInfo::new(MediumFast, 127, [51, 39]), // Farfetch'd
    SpeciesInfo::new(MediumFast, 127, [50, 48]), // Doduo
    SpeciesInfo::new(MediumFast, 127, [50, 48]), // Dodrio
    SpeciesInfo::new(MediumFast, 127, [47, 0]), // Seel
    SpeciesInfo::new(MediumFast, 127, [47, 0]), // Dewgong
    SpeciesInfo::new(MediumFast, 127, [1, 60]), // Grimer
    SpeciesInfo::new(MediumFast, 127, [1, 60]), // Muk
    SpeciesInfo::new(Slow, 127, [75, 0]), // Shellder
    SpeciesInfo::new(Slow, 127, [75, 0]), // Cloyster
    SpeciesInfo::new(MediumSlow, 127, [26, 0]), // Gastly
    SpeciesInfo::new(MediumSlow, 127, [26, 0]), // Haunter
    SpeciesInfo::new(MediumSlow, 127, [26, 0]), // Gengar
    SpeciesInfo::new(MediumFast, 127, [69, 5]), // Onix
    SpeciesInfo::new(MediumFast, 127, [15, 0]), // Drowzee
    SpeciesInfo::new(MediumFast, 127, [15, 0]), // Hypno
    SpeciesInfo::new(MediumFast, 127, [52, 75]), // Krabby
    SpeciesInfo::new(MediumFast, 127, [52, 75]), // Kingler
    SpeciesInfo::new(MediumFast, 255, [43, 9]), // Voltorb
    SpeciesInfo::new(MediumFast, 255, [43, 9]), // Electrode
    SpeciesInfo::new(Slow, 127, [34, 0]), // Exeggcute
    SpeciesInfo::new(Slow, 127, [34, 0]), // Exeggutor
    SpeciesInfo::new(MediumFast, 127, [69, 31]), // Cubone
    SpeciesInfo::new(MediumFast, 127, [69, 31]), // Marowak
    SpeciesInfo::new(MediumFast, 0, [7, 0]), // Hitmonlee
    SpeciesInfo::new(MediumFast, 0, [51, 0]), // Hitmonchan
    SpeciesInfo::new(MediumFast, 127, [20, 12]), // Lickitung
    SpeciesInfo::new(MediumFast, 127, [26, 0]), // Koffing
    SpeciesInfo::new(MediumFast, 127, [26, 0]), // Weezing
    SpeciesInfo::new(Slow, 127, [31, 69]), // Rhyhorn
    SpeciesInfo::new(Slow, 127, [31, 69]), // Rhydon
    SpeciesInfo::new(Fast, 254, [30, 32]), // Chansey
    SpeciesInfo::new(MediumFast, 127, [34, 0]), // Tangela
    SpeciesInfo::new(MediumFast, 254, [48, 0]), // Kangaskhan
    SpeciesInfo::new(MediumFast, 127, [33, 0]), // Horsea
    SpeciesInfo::new(MediumFast, 127, [38, 0]), // Seadra
    SpeciesInfo::new(MediumFast, 127, [33, 41]), // Goldeen
    SpeciesInfo::new(MediumFast, 127, [33, 41]), // Seaking
    SpeciesInfo::new(Slow, 255, [35, 30]), // Staryu
    SpeciesInfo::new(Slow, 255, [35, 30]), // Starmie
    SpeciesInfo::new(MediumFast, 127, [43, 0]), // Mr. Mime
    SpeciesInfo::new(MediumFast, 127, [68, 0]), // Scyther
    SpeciesInfo::new(MediumFast, 254, [12, 0]), // Jynx
    SpeciesInfo::new(MediumFast, 63, [9, 0]), // Electabuzz
    SpeciesInfo::new(MediumFast, 63, [49, 0]), // Magmar
    SpeciesInfo::new(Slow, 127, [52, 0]), // Pinsir
    SpeciesInfo::new(Slow, 0, [22, 0]), // Tauros
    SpeciesInfo::new(Slow, 127, [33, 0]), // Magikarp
    SpeciesInfo::new(Slow, 127, [22, 0]), // Gyarados
    SpeciesInfo::new(Slow, 127, [11, 75]), // Lapras
    SpeciesInfo::new(MediumFast, 255, [7, 0]), // Ditto
    SpeciesInfo::new(MediumFast, 31, [50, 0]), // Eevee
    SpeciesInfo::new(MediumFast, 31, [11, 0]), // Vaporeon
    SpeciesInfo::new(MediumFast, 31, [10, 0]), // Jolteon
    SpeciesInfo::new(MediumFast, 31, [18, 0]), // Flareon
    SpeciesInfo::new(MediumFast, 255, [36, 0]), // Porygon
    SpeciesInfo::new(MediumFast, 31, [33, 75]), // Omanyte
    SpeciesInfo::new(MediumFast, 31, [33, 75]), // Omastar
    SpeciesInfo::new(MediumFast, 31, [33, 4]), // Kabuto
    SpeciesInfo::new(MediumFast, 31, [33, 4]), // Kabutops
    SpeciesInfo::new(Slow, 31, [69, 46]), // Aerodactyl
    SpeciesInfo::new(Slow, 31, [17, 47]), // Snorlax
    SpeciesInfo::new(Slow, 255, [46, 0]), // Articuno
    SpeciesInfo::new(Slow, 255, [46, 0]), // Zapdos
    SpeciesInfo::new(Slow, 255, [46, 0]), // Moltres
    SpeciesInfo::new(Slow, 127, [61, 0]), // Dratini
    SpeciesInfo::new(Slow, 127, [61, 0]), // Dragonair
    SpeciesInfo::new(Slow, 127, [39, 0]), // Dragonite
    SpeciesInfo::new(Slow, 255, [46, 0]), // Mewtwo
    SpeciesInfo::new(MediumSlow, 255, [28, 0]), // Mew
    SpeciesInfo::new(MediumSlow, 31, [65, 0]), // Chikorita
    SpeciesInfo::new(MediumSlow, 31, [65, 0]), // Bayleef
    SpeciesInfo::new(MediumSlow, 31, [65, 0]), // Meganium
    SpeciesInfo::new(MediumSlow, 31, [66, 0]), // Cyndaquil
    SpeciesInfo::new(MediumSlow, 31, [66, 0]), // Quilava
    SpeciesInfo::new(MediumSlow, 31, [66, 0]), // Typhlosion
    SpeciesInfo::new(MediumSlow, 31, [67, 0]), // Totodile
    SpeciesInfo::new(MediumSlow, 31, [67, 0]), // Croconaw
    SpeciesInfo::new(MediumSlow, 31, [67, 0]), // Feraligatr
    SpeciesInfo::new(MediumFast, 127, [50, 51]), // Sentret
    SpeciesInfo::new(MediumFast, 127, [50, 51]), // Furret
    SpeciesInfo::new(MediumFast, 127, [15, 51]), // Hoothoot
    SpeciesInfo::new(MediumFast, 127, [15, 51]), // Noctowl
    SpeciesInfo::new(Fast, 127, [68, 48]), // Ledyba
    SpeciesInfo::new(Fast, 127, [68, 48]), // Ledian
    SpeciesInfo::new(Fast, 127, [68, 15]), // Spinarak
    SpeciesInfo::new(Fast, 127, [68, 15]), // Ariados
    SpeciesInfo::new(MediumFast, 127, [39, 0]), // Crobat
    SpeciesInfo::new(Slow, 127, [10, 35]), // Chinchou
    SpeciesInfo::new(Slow, 127, [10, 35]), // Lanturn
    SpeciesInfo::new(MediumFast, 127, [9, 0]), // Pichu
    SpeciesInfo::new(Fast, 191, [56, 0]), // Cleffa
    SpeciesInfo::new(Fast, 191, [56, 0]), // Igglybuff
    SpeciesInfo::new(Fast, 31, [55, 32]), // Togepi
    SpeciesInfo::new(Fast, 31, [55, 32]), // Togetic
    SpeciesInfo::new(MediumFast, 127, [28, 48]), // Natu
    SpeciesInfo::new(MediumFast, 127, [28, 48]), // Xatu
    SpeciesInfo::new(MediumSlow, 127, [9, 0]), // Mareep
    SpeciesInfo::new(MediumSlow, 127, [9, 0]), // Flaaffy
    SpeciesInfo::new(MediumSlow, 127, [9, 0]), // Ampharos
    SpeciesInfo::new(MediumSlow, 127, [34, 0]), // Bellossom
    SpeciesInfo::new(Fast, 127, [47, 37]), // Marill
    SpeciesInfo::new(Fast, 127, [47, 37]), // Azumarill
    SpeciesInfo::new(MediumFast, 127, [5, 69]), // Sudowoodo
    SpeciesInfo::new(MediumSlow, 127, [11, 6]), // Politoed
    SpeciesInfo::new(MediumSlow, 127, [34, 0]), // Hoppip
    SpeciesInfo::new(MediumSlow, 127, [34, 0]), // Skiploom
    SpeciesInfo::new(MediumSlow, 127, [34, 0]), // Jumpluff
    SpeciesInfo::new(Fast, 127, [50, 53]), // Aipom
    SpeciesInfo::new(MediumSlow, 127, [34, 0]), // Sunkern
    SpeciesInfo::new(MediumSlow, 127, [34, 0]), // Sunflora
    SpeciesInfo::new(MediumFast, 127, [3, 14]), // Yanma
    SpeciesInfo::new(MediumFast, 127, [6, 11]), // Wooper
    SpeciesInfo::new(MediumFast, 127, [6, 11]), // Quagsire
    SpeciesInfo::new(MediumFast, 31, [28, 0]), // Espeon
    SpeciesInfo::new(MediumFast, 31, [28, 0]), // Umbreon
    SpeciesInfo::new(MediumSlow, 127, [15, 0]), // Murkrow
    SpeciesInfo::new(MediumFast, 127, [12, 20]), // Slowking
    SpeciesInfo::new(Fast, 127, [26, 0]), // Misdreavus
    SpeciesInfo::new(MediumFast, 255, [26, 0]), // Unown
    SpeciesInfo::new(MediumFast, 127, [23, 0]), // Wobbuffet
    SpeciesInfo::new(MediumFast, 127, [39, 48]), // Girafarig
    SpeciesInfo::new(MediumFast, 127, [5, 0]), // Pineco
    SpeciesInfo::new(MediumFast, 127, [5, 0]), // Forretress
    SpeciesInfo::new(MediumFast, 127, [32, 50]), // Dunsparce
    SpeciesInfo::new(MediumSlow, 127, [52, 8]), // Gligar
    SpeciesInfo::new(MediumFast, 127, [69, 5]), // Steelix
    SpeciesInfo::new(Fast, 191, [22, 50]), // Snubbull
    SpeciesInfo::new(Fast, 191, [22, 0]), // Granbull
    SpeciesInfo::new(MediumFast, 127, [38, 33]), // Qwilfish
    SpeciesInfo::new(MediumFast, 127, [68, 0]), // Scizor
    SpeciesInfo::new(MediumSlow, 127, [5, 0]), // Shuckle
    SpeciesInfo::new(Slow, 127, [68, 62]), // Heracross
    SpeciesInfo::new(MediumSlow, 127, [39, 51]), // Sneasel
    SpeciesInfo::new(MediumFast, 127, [53, 0]), // Teddiursa
    SpeciesInfo::new(MediumFast, 127, [62, 0]), // Ursaring
    SpeciesInfo::new(MediumFast, 127, [40, 49]), // Slugma
    SpeciesInfo::new(MediumFast, 127, [40, 49]), // Magcargo
    SpeciesInfo::new(Slow, 127, [12, 0]), // Swinub
    SpeciesInfo::new(Slow, 127, [12, 0]), // Piloswine
    SpeciesInfo::new(Fast, 191, [55, 30]), // Corsola
    SpeciesInfo::new(MediumFast, 127, [55, 0]), // Remoraid
    SpeciesInfo::new(MediumFast, 127, [21, 0]), // Octillery
    SpeciesInfo::new(Fast, 127, [72, 55]), // Delibird
    SpeciesInfo::new(Slow, 127, [33, 11]), // Mantine
    SpeciesInfo::new(Slow, 127, [51, 5]), // Skarmory
    SpeciesInfo::new(Slow, 127, [48, 18]), // Houndour
    SpeciesInfo::new(Slow, 127, [48, 18]), // Houndoom
    SpeciesInfo::new(MediumFast, 127, [33, 0]), // Kingdra
    SpeciesInfo::new(MediumFast, 127, [53, 0]), // Phanpy
    SpeciesInfo::new(MediumFast, 127, [5, 0]), // Donphan
    SpeciesInfo::new(MediumFast, 255, [36, 0]), // Porygon2
    SpeciesInfo::new(Slow, 127, [22, 0]), // Stantler
    SpeciesInfo::new(Fast, 127, [20, 0]), // Smeargle
    SpeciesInfo::new(MediumFast, 0, [62, 0]), // Tyrogue
    SpeciesInfo::new(MediumFast, 0, [22, 0]), // Hitmontop
    SpeciesInfo::new(MediumFast, 254, [12, 0]), // Smoochum
    SpeciesInfo::new(MediumFast, 63, [9, 0]), // Elekid
    SpeciesInfo::new(MediumFast, 63, [49, 0]), // Magby
    SpeciesInfo::new(Slow, 254, [47, 0]), // Miltank
    SpeciesInfo::new(Fast, 254, [30, 32]), // Blissey
    SpeciesInfo::new(Slow, 255, [46, 0]), // Raikou
    SpeciesInfo::new(Slow, 255, [46, 0]), // Entei
    SpeciesInfo::new(Slow, 255, [46, 0]), // Suicune
    SpeciesInfo::new(Slow, 127, [62, 0]), // Larvitar
    SpeciesInfo::new(Slow, 127, [61, 0]), // Pupitar
    SpeciesInfo::new(Slow, 127, [45, 0]), // Tyranitar
    SpeciesInfo::new(Slow, 255, [46, 0]), // Lugia
    SpeciesInfo::new(Slow, 255, [46, 0]), // Ho-Oh
    SpeciesInfo::new(MediumSlow, 255, [30, 0]), // Celebi
    SpeciesInfo::new(MediumSlow, 31, [65, 0]), // Treecko
    SpeciesInfo::new(MediumSlow, 31, [65, 0]), // Grovyle
    SpeciesInfo::new(MediumSlow, 31, [65, 0]), // Sceptile
    SpeciesInfo::new(MediumSlow, 31, [66, 0]), // Torchic
    SpeciesInfo::new(MediumSlow, 31, [66, 0]), // Combusken
    SpeciesInfo::new(MediumSlow, 31, [66, 0]), // Blaziken
    SpeciesInfo::new(MediumSlow, 31, [67, 0]), // Mudkip
    SpeciesInfo::new(MediumSlow, 31, [67, 0]), // Marshtomp
    SpeciesInfo::new(MediumSlow, 31, [67, 0]), // Swampert
    SpeciesInfo::new(MediumFast, 127, [50, 0]), // Poochyena
    SpeciesInfo::new(MediumFast, 127, [22, 0]), // Mightyena
    SpeciesInfo::new(MediumFast, 127, [53, 0]), // Zigzagoon
    SpeciesInfo::new(MediumFast, 127, [53, 0]), // Linoone
    SpeciesInfo::new(MediumFast, 127, [19, 0]), // Wurmple
    SpeciesInfo::new(MediumFast, 127, [61, 0]), // Silcoon
    SpeciesInfo::new(MediumFast, 127, [68, 0]), // Beautifly
    SpeciesInfo::new(MediumFast, 127, [61, 0]), // Cascoon
    SpeciesInfo::new(MediumFast, 127, [19, 0]), // Dustox
    SpeciesInfo::new(MediumSlow, 127, [33, 44]), // Lotad
    SpeciesInfo::new(MediumSlow, 127, [33, 44]), // Lombre
    SpeciesInfo::new(MediumSlow, 127, [33, 44]), // Ludicolo
    SpeciesInfo::new(MediumSlow, 127, [34, 48]), // Seedot
    SpeciesInfo::new(MediumSlow, 127, [34, 48]), // Nuzleaf
    SpeciesInfo::new(MediumSlow, 127, [34, 48]), // Shiftry
    SpeciesInfo::new(MediumSlow, 127, [62, 0]), // Taillow
    SpeciesInfo::new(MediumSlow, 127, [62, 0]), // Swellow
    SpeciesInfo::new(MediumFast, 127, [51, 0]), // Wingull
    SpeciesInfo::new(MediumFast, 127, [51, 0]), // Pelipper
    SpeciesInfo::new(Slow, 127, [28, 36]), // Ralts
    SpeciesInfo::new(Slow, 127, [28, 36]), // Kirlia
    SpeciesInfo::new(Slow, 127, [28, 36]), // Gardevoir
    SpeciesInfo::new(MediumFast, 127, [33, 0]), // Surskit
    SpeciesInfo::new(MediumFast, 127, [22, 0]), // Masquerain
    SpeciesInfo::new(Fluctuating, 127, [27, 0]), // Shroomish
    SpeciesInfo::new(Fluctuating, 127, [27, 0]), // Breloom
    SpeciesInfo::new(Slow, 127, [54, 0]), // Slakoth
    SpeciesInfo::new(Slow, 127, [72, 0]), // Vigoroth
    SpeciesInfo::new(Slow, 127, [54, 0]), // Slaking
    SpeciesInfo::new(Erratic, 127, [14, 0]), // Nincada
    SpeciesInfo::new(Erratic, 127, [3, 0]), // Ninjask
    SpeciesInfo::new(Erratic, 255, [25, 0]), // Shedinja
    SpeciesInfo::new(MediumSlow, 127, [43, 0]), // Whismur
    SpeciesInfo::new(MediumSlow, 127, [43, 0]), // Loudred
    SpeciesInfo::new(MediumSlow, 127, [43, 0]), // Exploud
    SpeciesInfo::new(Fluctuating, 63, [47, 62]), // Makuhita
    SpeciesInfo::new(Fluctuating, 63, [47, 62]), // Hariyama
    SpeciesInfo::new(Fast, 191, [47, 37]), // Azurill
    SpeciesInfo::new(MediumFast, 127, [5, 42]), // Nosepass
    SpeciesInfo::new(Fast, 191, [56, 0]), // Skitty
    SpeciesInfo::new(Fast, 191, [56, 0]), // Delcatty
    SpeciesInfo::new(MediumSlow, 127, [51, 0]), // Sableye
    SpeciesInfo::new(Fast, 127, [52, 22]), // Mawile
    SpeciesInfo::new(Slow, 127, [5, 69]), // Aron
    SpeciesInfo::new(Slow, 127, [5, 69]), // Lairon
    SpeciesInfo::new(Slow, 127, [5, 69]), // Aggron
    SpeciesInfo::new(MediumFast, 127, [74, 0]), // Meditite
    SpeciesInfo::new(MediumFast, 127, [74, 0]), // Medicham
    SpeciesInfo::new(Slow, 127, [9, 31]), // Electrike
    SpeciesInfo::new(Slow, 127, [9, 31]), // Manectric
    SpeciesInfo::new(MediumFast, 127, [57, 0]), // Plusle
    SpeciesInfo::new(MediumFast, 127, [58, 0]), // Minun
    SpeciesInfo::new(Erratic, 0, [35, 68]), // Volbeat
    SpeciesInfo::new(Fluctuating, 254, [12, 0]), // Illumise
    SpeciesInfo::new(MediumSlow, 127, [30, 38]), // Roselia
    SpeciesInfo::new(Fluctuating, 127, [64, 60]), // Gulpin
    SpeciesInfo::new(Fluctuating, 127, [64, 60]), // Swalot
    SpeciesInfo::new(Slow, 127, [24, 0]), // Carvanha
    SpeciesInfo::new(Slow, 127, [24, 0]), // Sharpedo
    SpeciesInfo::new(Fluctuating, 127, [41, 12]), // Wailmer
    SpeciesInfo::new(Fluctuating, 127, [41, 12]), // Wailord
    SpeciesInfo::new(MediumFast, 127, [12, 0]), // Numel
    SpeciesInfo::new(MediumFast, 127, [40, 0]), // Camerupt
    SpeciesInfo::new(MediumFast, 127, [73, 0]), // Torkoal
    SpeciesInfo::new(Fast, 127, [47, 20]), // Spoink
    SpeciesInfo::new(Fast, 127, [47, 20]), // Grumpig
    SpeciesInfo::new(Fast, 127, [20, 0]), // Spinda
    SpeciesInfo::new(MediumSlow, 127, [52, 71]), // Trapinch
    SpeciesInfo::new(MediumSlow, 127, [26, 0]), // Vibrava
    SpeciesInfo::new(MediumSlow, 127, [26, 0]), // Flygon
    SpeciesInfo::new(MediumSlow, 127, [8, 0]), // Cacnea
    SpeciesInfo::new(MediumSlow, 127, [8, 0]), // Cacturne
    SpeciesInfo::new(Erratic, 127, [30, 0]), // Swablu
    SpeciesInfo::new(Erratic, 127, [30, 0]), // Altaria
    SpeciesInfo::new(Erratic, 127, [17, 0]), // Zangoose
    SpeciesInfo::new(Fluctuating, 127, [61, 0]), // Seviper
    SpeciesInfo::new(Fast, 255, [26, 0]), // Lunatone
    SpeciesInfo::new(Fast, 255, [26, 0]), // Solrock
    SpeciesInfo::new(MediumFast, 127, [12, 0]), // Barboach
    SpeciesInfo::new(MediumFast, 127, [12, 0]), // Whiscash
    SpeciesInfo::new(Fluctuating, 127, [52, 75]), // Corphish
    SpeciesInfo::new(Fluctuating, 127, [52, 75]), // Crawdaunt
    SpeciesInfo::new(MediumFast, 255, [26, 0]), // Baltoy
    SpeciesInfo::new(MediumFast, 255, [26, 0]), // Claydol
    SpeciesInfo::new(Erratic, 31, [21, 0]), // Lileep
    SpeciesInfo::new(Erratic, 31, [21, 0]), // Cradily
    SpeciesInfo::new(Erratic, 31, [4, 0]), // Anorith
    SpeciesInfo::new(Erratic, 31, [4, 0]), // Armaldo
    SpeciesInfo::new(Erratic, 127, [33, 0]), // Feebas
    SpeciesInfo::new(Erratic, 127, [63, 0]), // Milotic
    SpeciesInfo::new(MediumFast, 127, [59, 0]), // Castform
    SpeciesInfo::new(MediumSlow, 127, [16, 0]), // Kecleon
    SpeciesInfo::new(Fast, 127, [15, 0]), // Shuppet
    SpeciesInfo::new(Fast, 127, [15, 0]), // Banette
    SpeciesInfo::new(Fast, 127, [26, 0]), // Duskull
    SpeciesInfo::new(Fast, 127, [46, 0]), // Dusclops
    SpeciesInfo::new(Slow, 127, [34, 0]), // Tropius
    SpeciesInfo::new(Fast, 127, [26, 0]), // Chimecho
    SpeciesInfo::new(MediumSlow, 127, [46, 0]), // Absol
    SpeciesInfo::new(MediumFast, 127, [23, 0]), // Wynaut
    SpeciesInfo::new(MediumFast, 127, [39, 0]), // Snorunt
    SpeciesInfo::new(MediumFast, 127, [39, 0]), // Glalie
    SpeciesInfo::new(MediumSlow, 127, [47, 0]), // Spheal
    SpeciesInfo::new(MediumSlow, 127, [47, 0]), // Sealeo
    SpeciesInfo::new(MediumSlow, 127, [47, 0]), // Walrein
    SpeciesInfo::new(Erratic, 127, [75, 0]), // Clamperl
    SpeciesInfo::new(Erratic, 127, [33, 0]), // Huntail
    SpeciesInfo::new(Erratic, 127, [33, 0]), // Gorebyss
    SpeciesInfo::new(Slow, 31, [33, 69]), // Relicanth
    SpeciesInfo::new(Fast, 191, [33, 0]), // Luvdisc
    SpeciesInfo::new(Slow, 127, [69, 0]), // Bagon
    SpeciesInfo::new(Slow, 127, [69, 0]), // Shelgon
    SpeciesInfo::new(Slow, 127, [22, 0]), // Salamence
    SpeciesInfo::new(Slow, 255, [29, 0]), // Beldum
    SpeciesInfo::new(Slow, 255, [29, 0]), // Metang
    SpeciesInfo::new(Slow, 255, [29, 0]), // Metagross
    SpeciesInfo::new(Slow, 255, [29, 0]), // Regirock
    SpeciesInfo::new(Slow, 255, [29, 0]), // Regice
    SpeciesInfo::new(Slow, 255, [29, 0]), // Registeel
    SpeciesInfo::new(Slow, 254, [26, 0]), // Latias
    SpeciesInfo::new(Slow, 0, [26, 0]), // Latios
    SpeciesInfo::new(Slow, 255, [2, 0]), // Kyogre
    SpeciesInfo::new(Slow, 255, [70, 0]), // Groudon
    SpeciesInfo::new(Slow, 255, [77, 0]), // Rayquaza
    SpeciesInfo::new(Slow, 255, [32, 0]), // Jirachi
    SpeciesInfo::new(Slow, 255, [46, 0]), // Deoxys
];

/// Generation 1 internal species index to national Pokédex number. Zero marks
/// the unused indices.
pub static GEN1_INDEX_TO_NATIONAL: [u8; 191] = [
    0, 112, 115, 32, 35, 21, 100, 34, 80, 2,
    103, 108, 102, 88, 94, 29, 31, 104, 111, 131,
    59, 151, 130, 90, 72, 92, 123, 120, 9, 127,
    114, 0, 0, 58, 95, 22, 16, 79, 64, 75,
    113, 67, 122, 106, 107, 24, 47, 54, 96, 76,
    0, 126, 0, 125, 82, 109, 0, 56, 86, 50,
    128, 0, 0, 0, 83, 48, 149, 0, 0, 0,
    84, 60, 124, 146, 144, 145, 132, 52, 98, 0,
    0, 0, 37, 38, 25, 26, 0, 0, 147, 148,
    140, 141, 116, 117, 0, 0, 27, 28, 138, 139,
    39, 40, 133, 136, 135, 134, 66, 41, 23, 46,
    61, 62, 13, 14, 15, 0, 85, 57, 51, 49,
    87, 0, 0, 10, 11, 12, 68, 0, 55, 97,
    42, 150, 143, 129, 0, 0, 89, 0, 99, 91,
    0, 101, 36, 110, 53, 105, 0, 93, 63, 65,
    17, 18, 121, 1, 3, 73, 0, 118, 119, 0,
    0, 0, 0, 77, 78, 19, 20, 33, 30, 74,
    137, 142, 0, 81, 0, 0, 4, 7, 5, 8,
    6, 0, 0, 0, 0, 43, 44, 45, 69, 70,
    71,
];

/// Generation 3 internal index of the first Hoenn species (Treecko).
pub const GEN3_FIRST_HOENN_INDEX: u16 = 277;

/// National Pokédex numbers of generation 3 internal indices 277 and up.
pub static GEN3_HOENN_INDEX_TO_NATIONAL: [u16; 135] = [
    252, 253, 254, 255, 256, 257, 258, 259, 260, 261,
    262, 263, 264, 265, 266, 267, 268, 269, 270, 271,
    272, 273, 274, 275, 290, 291, 292, 276, 277, 285,
    286, 327, 278, 279, 283, 284, 320, 321, 300, 301,
    352, 343, 344, 299, 324, 302, 339, 340, 370, 341,
    342, 349, 350, 318, 319, 328, 329, 330, 296, 297,
    309, 310, 322, 323, 363, 364, 365, 331, 332, 361,
    362, 337, 338, 298, 325, 326, 311, 312, 303, 307,
    308, 333, 334, 360, 355, 356, 315, 287, 288, 289,
    316, 317, 357, 293, 294, 295, 366, 367, 368, 359,
    353, 354, 336, 335, 369, 304, 305, 306, 351, 313,
    314, 345, 346, 347, 348, 280, 281, 282, 371, 372,
    373, 374, 375, 376, 377, 378, 379, 382, 383, 384,
    380, 381, 385, 386, 358,
];
