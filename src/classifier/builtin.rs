// Built-in rule table. Earlier entries win, so specific or contextual rules
// sit above the broad keyword rules they overlap with.
use super::predicate::PredicateSpec;
use super::rules::{RuleSpec, RuleTableSpec};

pub const BUILTIN_VERSION: u32 = 3;

fn any(main: &str, sub: &str, keywords: &[&str]) -> RuleSpec {
    RuleSpec::new(main, sub, PredicateSpec::any(keywords))
}

fn context(main: &str, sub: &str, primary: &[&str], context: &[&str]) -> RuleSpec {
    RuleSpec::new(main, sub, PredicateSpec::context(primary, context))
}

fn word(main: &str, sub: &str, words: &[&str], exclude: &[&str]) -> RuleSpec {
    RuleSpec::new(main, sub, PredicateSpec::word(words, exclude))
}

fn either(main: &str, sub: &str, of: Vec<PredicateSpec>) -> RuleSpec {
    RuleSpec::new(main, sub, PredicateSpec::either(of))
}

pub fn builtin_spec() -> RuleTableSpec {
    let mut rules = Vec::new();
    rules.extend(babies_and_kids());
    rules.extend(video_games());
    rules.extend(computers());
    rules.extend(electronics());
    // entertainment before grocery: "lego star wars" must not become a snack
    rules.extend(entertainment());
    rules.extend(grocery());
    rules.extend(home());
    rules.extend(clothing());
    rules.extend(health_and_beauty());
    rules.extend(sporting_goods());
    rules.extend(autos());
    rules.extend(travel());
    rules.extend(gifts_and_restaurants());
    rules.extend(office());
    rules.extend(pets_and_books());

    RuleTableSpec {
        version: BUILTIN_VERSION,
        rules,
    }
}

#[rustfmt::skip]
fn babies_and_kids() -> Vec<RuleSpec> {
    const MAIN: &str = "Babies & Kids";
    vec![
        either(MAIN, "Kids Toys", vec![
            PredicateSpec::any(&[
                "kids toy", "children toy", "toy car", "toy truck", "go kart", "hoverboard",
                "kids bike", "baby toy", "toddler toy", "ride-on", "remote control car",
                "rc car", "maisto", "hot wheels",
            ]),
            PredicateSpec::word(&["atv"], &[]),
        ]),
        either(MAIN, "Baby Products", vec![
            PredicateSpec::any(&[
                "baby", "infant", "toddler", "diaper", "baby food", "formula", "stroller",
                "car seat", "baby monitor", "nursery",
            ]),
            // "subscribe & save" contains "crib"
            PredicateSpec::word(&["crib", "cribs"], &[]),
        ]),
    ]
}

#[rustfmt::skip]
fn video_games() -> Vec<RuleSpec> {
    const MAIN: &str = "Video Games";
    vec![
        any(MAIN, "Controllers & Accessories", &[
            "game controller", "xbox controller", "playstation controller", "ps5 controller",
            "switch controller", "dualsense", "dualshock", "8bitdo", "scuf",
        ]),
        any(MAIN, "Video Game Memberships", &[
            "xbox game pass", "game pass ultimate", "playstation plus", "ps plus", "ps+",
            "nintendo switch online", "ea play", "ubisoft+",
        ]),
        any(MAIN, "Computer & PC Games", &[
            "steam game", "steam key", "epic games store", "origin game", "pc game",
            "battle.net", "gog.com", "gaming pc", "steam deck",
        ]),
        any(MAIN, "Nintendo Switch", &["switch game", "nintendo switch game"]),
        any(MAIN, "PlayStation", &["ps5 game", "ps4 game", "playstation game"]),
        any(MAIN, "Xbox", &["xbox game"]),
        any(MAIN, "Video Game Consoles", &[
            "ps5", "playstation 5", "ps4", "playstation 4", "xbox series x", "xbox series s",
            "xbox one", "nintendo switch", "switch oled",
        ]),
    ]
}

#[rustfmt::skip]
fn computers() -> Vec<RuleSpec> {
    const MAIN: &str = "Computers";
    vec![
        // whole machines first: their titles list gpu, storage and memory specs
        word(MAIN, "Laptops",
            &[
                "laptop", "laptops", "notebook", "notebooks", "chromebook", "chromebooks",
                "macbook", "ultrabook",
            ],
            &[
                "laptop bag", "laptop backpack", "laptop sleeve", "laptop stand",
                "notebook paper",
            ],
        ),
        any(MAIN, "Desktop Computers", &[
            "desktop pc", "gaming desktop", "prebuilt pc", "imac", "desktop computer",
        ]),
        any(MAIN, "GPU's", &[
            "rtx ", "gtx ", "rx 6", "rx 7", "graphics card", "geforce", "radeon", "gpu",
        ]),
        any(MAIN, "SSD's & Hard Drives", &[
            "ssd", "solid state drive", "nvme", "m.2", "hard drive", "hdd", "external drive",
        ]),
        either(MAIN, "Memory", vec![
            PredicateSpec::word(&["ram"], &["dodge ram", "ram 1500", "ram 2500", "ram truck"]),
            PredicateSpec::any(&["ddr4", "ddr5", "memory kit", "corsair vengeance"]),
        ]),
        any(MAIN, "Computer Networking", &[
            "router", "wi-fi", "wifi 6", "wifi 7", "mesh system", "ethernet switch",
            "network adapter", "modem", "range extender",
        ]),
        any(MAIN, "Printers", &[
            "printer", "inkjet", "laser printer", "toner", "ink cartridge", "all-in-one printer",
        ]),
        any(MAIN, "Monitors", &[
            "monitor", "gaming monitor", "curved monitor", "ultrawide", "4k monitor", "display",
        ]),
        any(MAIN, "Mice & Keyboards", &[
            "mouse", "keyboard", "gaming mouse", "gaming keyboard", "mechanical keyboard",
            "wireless mouse",
        ]),
        any(MAIN, "Internet, Websites & VPN's", &[
            "vpn", "domain", "hosting", "web hosting", "cloud storage", "nord vpn", "expressvpn",
        ]),
    ]
}

#[rustfmt::skip]
fn electronics() -> Vec<RuleSpec> {
    const MAIN: &str = "Electronics";
    vec![
        either(MAIN, "Cell Phones & Plans", vec![
            PredicateSpec::any(&[
                "iphone", "galaxy s", "galaxy z", "pixel phone", "smartphone", "cell phone",
                "mobile plan", "wireless plan", "us mobile", "mint mobile", "cricket wireless",
            ]),
            PredicateSpec::word(&["visible"], &[]),
        ]),
        any(MAIN, "Tablets", &["ipad", "galaxy tab", "surface pro", "kindle fire", "android tablet"]),
        any(MAIN, "Cameras & Photography", &[
            "camera", "mirrorless", "dslr", "gopro", "action camera", "webcam", "lens", "canon",
            "nikon", "sony alpha",
        ]),
        any(MAIN, "Tracking Devices", &[
            "airtag", "air tag", "tile tracker", "tracker", "bluetooth tracker", "gps tracker",
        ]),
        any(MAIN, "TV's", &[
            "4k tv", "hdr tv", "oled tv", "qled tv", "uhd tv", "smart tv", "tcl tv", "samsung tv",
            "lg tv", "sony tv",
        ]),
        any(MAIN, "Sound Bars", &["soundbar", "sound bar"]),
        any(MAIN, "Speakers", &[
            "bluetooth speaker", "smart speaker", "portable speaker", "jbl", "bose speaker",
            "alexa", "echo dot",
        ]),
        any(MAIN, "Headphones, Headsets & Earbuds", &[
            "headphones", "earbuds", "earphones", "headset", "gaming headset", "airpods", "beats",
            "sony wh",
        ]),
        any(MAIN, "Projectors", &["projector", "home theater projector", "4k projector"]),
        any(MAIN, "Smart Watches & Wearables", &[
            "smartwatch", "apple watch", "fitbit", "wearable", "fitness tracker", "garmin watch",
        ]),
        any(MAIN, "Chargers & Power Banks", &[
            "power bank", "portable charger", "anker", "charging cable", "usb-c cable",
        ]),
        either(MAIN, "UPS, Surge Protectors & Powerstrips", vec![
            PredicateSpec::word(&["ups"], &[]),
            PredicateSpec::any(&["surge protector", "power strip", "battery backup"]),
        ]),
    ]
}

#[rustfmt::skip]
fn entertainment() -> Vec<RuleSpec> {
    const MAIN: &str = "Entertainment";
    vec![
        any(MAIN, "Collectibles & Toys", &[
            "funko pop", "funko", "action figure", "collectible", "replica", "lego",
            "building set", "lego set", "star wars", "marvel legends", "mcfarlane", "model kit",
        ]),
        either(MAIN, "Streaming Services", vec![
            PredicateSpec::any(&[
                "disney+", "disney plus", "netflix", "hulu", "paramount+", "peacock", "hbo max",
                "apple tv+", "prime video",
            ]),
            PredicateSpec::context(&["max "], &["streaming", "subscription", "hbo"]),
        ]),
        either(MAIN, "Musical Instruments", vec![
            PredicateSpec::any(&[
                "guitar", "electric guitar", "acoustic guitar", "bass guitar", "piano", "drum",
                "ukulele", "violin", "synthesizer", "88-key", "61-key",
            ]),
            PredicateSpec::word(&["midi"], &[]),
        ]),
        any(MAIN, "Movies", &["blu-ray", "dvd", "movie", "4k blu-ray"]),
        any(MAIN, "TV Series & TV Shows", &[
            "tv series", "tv show", "season 1", "season 2", "complete series",
        ]),
        any(MAIN, "Games, Board Games & Card Games", &[
            "board game", "card game", "tabletop", "dungeons", "magic the gathering",
            "pokemon cards",
        ]),
    ]
}

#[rustfmt::skip]
fn grocery() -> Vec<RuleSpec> {
    const MAIN: &str = "Grocery";
    vec![
        any(MAIN, "Household Goods", &[
            "paper towel", "toilet paper", "tissues", "cleaning supplies", "detergent",
            "dish soap", "laundry", "trash bags", "household", "cleaning wipes", "lysol", "clorox",
        ]),
        any(MAIN, "Snacks, Nuts & Chips", &[
            "chips", "doritos", "cheetos", "pringles", "snack", "snacks", "trail mix",
            "mixed nuts", "almonds", "cashews", "pistachios", "crackers", "popcorn",
        ]),
        // bare "coffee" also names tables and makers
        context(MAIN, "Drinks & Beverages",
            &["coffee"],
            &["pod", "k-cup", "beans", "ground", "instant", "nespresso", "starbucks", "folgers"],
        ),
        either(MAIN, "Drinks & Beverages", vec![
            PredicateSpec::any(&[
                "soda", "sparkling water", "energy drink", "juice", "gatorade", "vitamin water",
            ]),
            PredicateSpec::word(&["tea", "teas", "cola"], &["tea kettle"]),
        ]),
        any(MAIN, "Breakfast Foods", &["cereal", "oatmeal", "granola", "pancake mix", "breakfast"]),
        any(MAIN, "Pasta", &["pasta", "spaghetti", "macaroni", "penne", "linguine"]),
        word(MAIN, "Rice & Grains", &["rice", "quinoa"], &["rice cooker"]),
        any(MAIN, "Soups, Sauces, Packaged Meals & Canned Goods", &[
            "frozen dinner", "soup", "canned soup", "canned", "microwave meal", "ramen",
        ]),
        any(MAIN, "Condiments & Spices", &[
            "ketchup", "mustard", "hot sauce", "spice", "seasoning", "sauce", "mayo", "sriracha",
        ]),
        any(MAIN, "Meat & Frozen Foods", &[
            "turkey", "chicken breast", "ground beef", "steak", "pork", "salmon", "frozen pizza",
            "ice cream",
        ]),
    ]
}

#[rustfmt::skip]
fn home() -> Vec<RuleSpec> {
    const MAIN: &str = "Home & Home Improvement";
    vec![
        any(MAIN, "Kitchen & Cookware", &[
            "cookware", "frying pan", "skillet", "pot set", "dutch oven", "bakeware",
            "silverware", "flatware", "utensil", "knife set", "cutting board", "mixing bowl",
            "calphalon", "tefal", "cast iron", "non-stick", "parchment paper",
        ]),
        either(MAIN, "Lighting", vec![
            PredicateSpec::word(&["lamp", "lamps"], &[]),
            PredicateSpec::any(&[
                "light bulb", "led light", "led strip", "chandelier", "ceiling light",
                "smart bulb", "philips hue", "string lights",
            ]),
        ]),
        any(MAIN, "Storage & Organization", &[
            "storage bin", "storage container", "organizer", "shelving", "closet organizer",
            "drawer organizer", "garage storage", "lunch box", "insulated lunch",
        ]),
        any(MAIN, "Grills & Grilling Accessories", &[
            "grill", "gas grill", "charcoal grill", "pellet grill", "smoker", "vertical smoker",
            "griddle", "grilling", "bbq accessories", "blackstone",
        ]),
        word(MAIN, "Stoves",
            &["stove", "stoves", "oven", "ovens", "range", "cooktop"],
            &["toaster oven", "microwave oven", "camp stove", "range extender"],
        ),
        any(MAIN, "Gardening & Outdoor", &[
            "gardening", "lawn mower", "trimmer", "weed eater", "leaf blower", "garden hose",
            "garden tools", "patio furniture", "patio set", "yard tool",
        ]),
        any(MAIN, "Mattresses, Sheets & Bedding", &[
            "mattress", "memory foam mattress", "bedding", "sheet set", "duvet", "comforter",
            "pillow", "bed frame",
        ]),
        any(MAIN, "Vacuums & Floor Cleaners", &[
            "vacuum", "stick vac", "robot vacuum", "robovac", "floor cleaner", "steam mop",
            "dyson", "shark vacuum",
        ]),
        any(MAIN, "Small Appliances", &[
            "air fryer", "blender", "toaster", "microwave", "coffee maker", "espresso machine",
            "slow cooker", "instant pot", "food processor", "stand mixer", "rice cooker",
            "pressure cooker", "ninja", "keurig",
        ]),
        any(MAIN, "Refrigerators & Freezers", &["refrigerator", "fridge", "freezer", "mini fridge"]),
        any(MAIN, "Washers & Dryers", &["washer", "washing machine", "dryer", "washer dryer"]),
        either(MAIN, "Furniture", vec![
            PredicateSpec::any(&[
                "sofa", "couch", "office chair", "gaming chair", "dining table", "bookshelf",
                "recliner", "sectional", "futon", "ottoman", "nightstand", "dresser",
                "coffee table", "end table",
            ]),
            PredicateSpec::word(&["desk", "desks"], &[]),
        ]),
        either(MAIN, "Tool Sets", vec![
            PredicateSpec::any(&[
                "drill", "circular saw", "miter saw", "tool set", "tool kit", "wrench set",
                "socket set", "screwdriver", "dewalt", "milwaukee", "ryobi", "makita",
            ]),
            PredicateSpec::word(&["saw", "saws"], &[]),
        ]),
        any(MAIN, "Ladders", &["ladder", "step ladder", "extension ladder"]),
        either(MAIN, "Air Conditioners, Heaters, Purifiers & More", vec![
            PredicateSpec::any(&[
                "air purifier", "space heater", "air conditioner", "portable ac",
                "dehumidifier", "humidifier", "hand warmer",
            ]),
            PredicateSpec::word(&["fan", "fans"], &[]),
        ]),
    ]
}

#[rustfmt::skip]
fn clothing() -> Vec<RuleSpec> {
    const MAIN: &str = "Clothing & Accessories";
    vec![
        any(MAIN, "Shoes", &[
            "sneakers", "running shoes", "sandals", "boots", "shoe", "clogs", "athletic shoes",
            "nike", "adidas",
        ]),
        any(MAIN, "Bags & Luggage", &[
            "backpack", "luggage", "suitcase", "duffel bag", "tote bag", "messenger bag",
            "laptop bag",
        ]),
        any(MAIN, "Socks", &[
            "socks", "sock", "ankle socks", "crew socks", "compression socks", "goldtoe",
        ]),
        either(MAIN, "Sleepwear", vec![
            PredicateSpec::any(&["pajamas", "pj set", "pjs", "sleepwear", "nightgown", "gap kids"]),
            PredicateSpec::word(&["robe", "robes"], &[]),
        ]),
        either(MAIN, "Apparel", vec![
            PredicateSpec::any(&[
                "t-shirt", "hoodie", "jacket", "jeans", "pants", "shorts", "sweater", "fleece",
                "flannel", "outerwear", "apparel", "clothes", "clothing", "polo", "sweatshirt",
            ]),
            PredicateSpec::word(&["dress", "dresses"], &[]),
        ]),
        either(MAIN, "Watches", vec![
            PredicateSpec::word(&["watch", "watches"], &[]),
            PredicateSpec::any(&["chronograph", "wristwatch", "timepiece"]),
        ]),
        any(MAIN, "Sunglasses", &["sunglasses", "sunglass", "ray-ban", "oakley"]),
        any(MAIN, "Jewelry", &[
            "necklace", "bracelet", "earring", "engagement ring", "wedding ring", "diamond ring",
            "gold ring",
        ]),
        any(MAIN, "Eyewear", &[
            "eyeglasses", "prescription glasses", "reading glasses", "goggles", "optical",
            "goggles4u",
        ]),
    ]
}

#[rustfmt::skip]
fn health_and_beauty() -> Vec<RuleSpec> {
    const MAIN: &str = "Health & Beauty";
    vec![
        any(MAIN, "Personal Care", &[
            "cotton swab", "q-tip", "cotton ball", "hair straightener", "curling iron",
            "hair dryer", "blow dryer", "flat iron", "hair styling",
        ]),
        any(MAIN, "Vitamins", &[
            "vitamin", "multivitamin", "supplement", "collagen", "omega-3", "probiotics",
            "magnesium",
        ]),
        any(MAIN, "Protein Powder & Shakes", &[
            "protein powder", "whey", "casein", "protein shake", "pre-workout", "creatine",
        ]),
        any(MAIN, "Shampoo & Hair Care", &["shampoo", "conditioner", "hair care", "hair oil"]),
        any(MAIN, "Toothpaste, Toothbrushes & Oral Care", &[
            "toothpaste", "toothbrush", "mouthwash", "oral care", "floss", "whitening",
        ]),
        any(MAIN, "Razors & Shaving Supplies", &[
            "razor", "shaving cream", "shaver", "electric shaver", "gillette",
        ]),
        any(MAIN, "Skin Care", &[
            "face cream", "moisturizer", "skin care", "lotion", "serum", "sunscreen", "spf",
        ]),
        any(MAIN, "Fragrances", &["perfume", "cologne", "fragrance", "body spray"]),
    ]
}

#[rustfmt::skip]
fn sporting_goods() -> Vec<RuleSpec> {
    const MAIN: &str = "Sporting Goods";
    vec![
        any(MAIN, "Guns, Ammo & Accessories", &[
            "gun safe", "ammo", "ammunition", "9mm", ".22lr", "5.56mm", "brass", "firearm",
        ]),
        any(MAIN, "Hunting", &[
            "hunting", "trail camera", "camo", "camouflage", "hunting boots", "deer", "optics",
            "rifle scope", "binoculars",
        ]),
        any(MAIN, "Fishing", &[
            "fishing", "fish finder", "fishing rod", "fishing reel", "tackle", "lure", "bait",
        ]),
        any(MAIN, "Golf", &[
            "golf", "golf ball", "golf club", "putter", "driver", "iron set", "golf bag",
        ]),
        any(MAIN, "Knives", &["knife", "pocket knife", "hunting knife", "blade", "swiss army"]),
        any(MAIN, "Sports Equipment", &[
            "basketball hoop", "baseball bat", "soccer ball", "football", "sports ball",
            "volleyball", "tennis", "badminton", "ping pong", "table tennis",
        ]),
        any(MAIN, "Fitness & Wellness", &[
            "yoga mat", "resistance band", "foam roller", "fitness tracker", "fitness",
            "wellness", "pilates", "heavy bag", "boxing", "jump rope",
        ]),
        // "exercise bike" belongs here, not with bicycles
        any(MAIN, "Exercise Equipment", &[
            "treadmill", "elliptical", "rowing machine", "dumbbell", "kettlebell", "weight set",
            "home gym", "smith cage", "walking pad", "weight bench", "barbell", "exercise bike",
        ]),
        any(MAIN, "Bicycles & Bike Accessories", &[
            "bike", "bicycle", "mountain bike", "road bike", "e-bike", "bike helmet",
        ]),
        any(MAIN, "Pickleball", &["pickleball", "paddle", "pickle ball"]),
        any(MAIN, "Coolers", &["cooler", "ice chest", "yeti cooler"]),
        any(MAIN, "Water Bottles", &[
            "water bottle", "hydro flask", "yeti bottle", "insulated bottle",
        ]),
        either(MAIN, "Camping & Outdoor", vec![
            PredicateSpec::word(&["tent", "tents"], &[]),
            PredicateSpec::any(&[
                "sleeping bag", "camping", "backpacking", "hiking boots", "trekking pole",
                "camping gear", "hammock", "camp stove",
            ]),
        ]),
    ]
}

#[rustfmt::skip]
fn autos() -> Vec<RuleSpec> {
    const MAIN: &str = "Autos";
    vec![
        any(MAIN, "Car Accessories", &[
            "tire inflator", "air compressor", "car charger", "dash cam", "dashcam", "car mount",
            "phone mount", "car vacuum", "seat cover", "magsafe car",
        ]),
        any(MAIN, "Motor Oil", &["motor oil", "engine oil", "synthetic oil", "mobil 1", "castrol"]),
        any(MAIN, "Auto Detailing & Car Care", &[
            "car wash", "car wax", "tire shine", "detail spray", "car polish",
        ]),
        any(MAIN, "Jump Starter", &["jump starter", "jumper starter", "jump box"]),
        any(MAIN, "Automotive Battery Chargers", &[
            "car battery charger", "battery maintainer", "battery tender",
        ]),
        any(MAIN, "EV Chargers", &["ev charger", "level 2 charger", "tesla charger"]),
        any(MAIN, "Tires", &["car tire", "all-season tire", "winter tire", "tire set"]),
    ]
}

#[rustfmt::skip]
fn travel() -> Vec<RuleSpec> {
    const MAIN: &str = "Travel & Vacations";
    vec![
        any(MAIN, "Hotels", &["hotel", "resort", "vacation rental", "airbnb"]),
        any(MAIN, "Flights", &["flight", "airfare", "round-trip flights", "airline tickets"]),
        any(MAIN, "Car Rentals", &["car rental", "rental car"]),
        any(MAIN, "Cruises", &["cruise", "cruise line", "caribbean cruise"]),
        any(MAIN, "Theme Parks & Attractions", &[
            "theme park", "disneyland", "disney world", "universal studios", "six flags",
            "seaworld",
        ]),
    ]
}

#[rustfmt::skip]
fn gifts_and_restaurants() -> Vec<RuleSpec> {
    vec![
        any("Flowers & Gifts", "Gift Cards", &["gift card", "e-gift", "egift"]),
        any("Flowers & Gifts", "Greeting Cards & Invitations", &[
            "greeting card", "invitation", "birthday card",
        ]),
        any("Restaurants", "Pizza", &["pizza hut", "domino's", "little caesars", "papa johns"]),
        any("Restaurants", "Delivery & Take Out", &["uber eats", "doordash", "grubhub", "postmates"]),
        any("Restaurants", "Fast Food", &[
            "mcdonald's", "burger king", "wendy's", "taco bell", "kfc", "popeyes", "fast food",
            "chick-fil-a", "subway", "chipotle",
        ]),
    ]
}

#[rustfmt::skip]
fn office() -> Vec<RuleSpec> {
    const MAIN: &str = "Office & School Supplies";
    vec![
        any(MAIN, "Photo Printing", &[
            "photo print", "photo service", "canvas print", "photo book", "walgreens photo",
        ]),
        any(MAIN, "Paper", &["printer paper", "copy paper", "notebook paper", "cardstock"]),
        either(MAIN, "Pencils, Pens & Markers", vec![
            PredicateSpec::word(&["pen", "pens"], &[]),
            PredicateSpec::any(&["pencil", "marker", "highlighter", "crayons", "colored pencils"]),
        ]),
        any(MAIN, "Office Supplies", &["binder", "folder", "planner", "calendar", "sticky notes"]),
        either(MAIN, "Tape & Packaging", vec![
            PredicateSpec::word(&["tape"], &[]),
            PredicateSpec::any(&["packing tape", "scotch tape", "duct tape", "packaging supplies"]),
        ]),
    ]
}

#[rustfmt::skip]
fn pets_and_books() -> Vec<RuleSpec> {
    vec![
        any("Pets", "Dog Food & Treats", &["dog food", "dog treats", "puppy food"]),
        any("Pets", "Cat Food & Treats", &["cat food", "cat treats", "kitten food"]),
        any("Pets", "Pet Toys", &["pet toy", "dog toy", "cat toy"]),
        any("Pets", "Pet Supplies", &[
            "pet bed", "dog bed", "cat bed", "pet carrier", "leash", "collar",
        ]),
        any("Books & Magazines", "eBooks", &["ebook", "kindle book", "digital book"]),
        any("Books & Magazines", "Books", &[
            "hardcover", "paperback", "novel", "fiction", "non-fiction", "cookbook",
        ]),
        any("Books & Magazines", "Magazines", &["magazine subscription", "magazine"]),
    ]
}
