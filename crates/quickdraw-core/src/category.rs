//! The static Quick, Draw! category catalog.
//!
//! Maps each human-readable category name to the name of its backing
//! binary file in the remote object store. The table is fixed data in
//! the dataset's published order; nothing here is computed at runtime.

use crate::error::QuickDrawError;

/// One entry of the category catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Category {
    /// Human-readable category name (e.g. `"aircraft carrier"`).
    pub name: &'static str,
    /// Remote (and local cache) file name, e.g. `"aircraft%20carrier.bin"`.
    pub file_name: &'static str,
}

/// Number of categories in the catalog.
pub const CATEGORY_COUNT: usize = 345;

/// Every known category, in the dataset's published order.
pub static CATEGORIES: [Category; CATEGORY_COUNT] = [
    entry("aircraft carrier", "aircraft%20carrier.bin"),
    entry("airplane", "airplane.bin"),
    entry("alarm clock", "alarm%20clock.bin"),
    entry("ambulance", "ambulance.bin"),
    entry("angel", "angel.bin"),
    entry("animal migration", "animal%20migration.bin"),
    entry("ant", "ant.bin"),
    entry("anvil", "anvil.bin"),
    entry("apple", "apple.bin"),
    entry("arm", "arm.bin"),
    entry("asparagus", "asparagus.bin"),
    entry("axe", "axe.bin"),
    entry("backpack", "backpack.bin"),
    entry("banana", "banana.bin"),
    entry("bandage", "bandage.bin"),
    entry("barn", "barn.bin"),
    entry("baseball bat", "baseball%20bat.bin"),
    entry("baseball", "baseball.bin"),
    entry("basket", "basket.bin"),
    entry("basketball", "basketball.bin"),
    entry("bat", "bat.bin"),
    entry("bathtub", "bathtub.bin"),
    entry("beach", "beach.bin"),
    entry("bear", "bear.bin"),
    entry("beard", "beard.bin"),
    entry("bed", "bed.bin"),
    entry("bee", "bee.bin"),
    entry("belt", "belt.bin"),
    entry("bench", "bench.bin"),
    entry("bicycle", "bicycle.bin"),
    entry("binoculars", "binoculars.bin"),
    entry("bird", "bird.bin"),
    entry("birthday cake", "birthday%20cake.bin"),
    entry("blackberry", "blackberry.bin"),
    entry("blueberry", "blueberry.bin"),
    entry("book", "book.bin"),
    entry("boomerang", "boomerang.bin"),
    entry("bottlecap", "bottlecap.bin"),
    entry("bowtie", "bowtie.bin"),
    entry("bracelet", "bracelet.bin"),
    entry("brain", "brain.bin"),
    entry("bread", "bread.bin"),
    entry("bridge", "bridge.bin"),
    entry("broccoli", "broccoli.bin"),
    entry("broom", "broom.bin"),
    entry("bucket", "bucket.bin"),
    entry("bulldozer", "bulldozer.bin"),
    entry("bus", "bus.bin"),
    entry("bush", "bush.bin"),
    entry("butterfly", "butterfly.bin"),
    entry("cactus", "cactus.bin"),
    entry("cake", "cake.bin"),
    entry("calculator", "calculator.bin"),
    entry("calendar", "calendar.bin"),
    entry("camel", "camel.bin"),
    entry("camera", "camera.bin"),
    entry("camouflage", "camouflage.bin"),
    entry("campfire", "campfire.bin"),
    entry("candle", "candle.bin"),
    entry("cannon", "cannon.bin"),
    entry("canoe", "canoe.bin"),
    entry("car", "car.bin"),
    entry("carrot", "carrot.bin"),
    entry("castle", "castle.bin"),
    entry("cat", "cat.bin"),
    entry("ceiling fan", "ceiling%20fan.bin"),
    entry("cell phone", "cell%20phone.bin"),
    entry("cello", "cello.bin"),
    entry("chair", "chair.bin"),
    entry("chandelier", "chandelier.bin"),
    entry("church", "church.bin"),
    entry("circle", "circle.bin"),
    entry("clarinet", "clarinet.bin"),
    entry("clock", "clock.bin"),
    entry("cloud", "cloud.bin"),
    entry("coffee cup", "coffee%20cup.bin"),
    entry("compass", "compass.bin"),
    entry("computer", "computer.bin"),
    entry("cookie", "cookie.bin"),
    entry("cooler", "cooler.bin"),
    entry("couch", "couch.bin"),
    entry("cow", "cow.bin"),
    entry("crab", "crab.bin"),
    entry("crayon", "crayon.bin"),
    entry("crocodile", "crocodile.bin"),
    entry("crown", "crown.bin"),
    entry("cruise ship", "cruise%20ship.bin"),
    entry("cup", "cup.bin"),
    entry("diamond", "diamond.bin"),
    entry("dishwasher", "dishwasher.bin"),
    entry("diving board", "diving%20board.bin"),
    entry("dog", "dog.bin"),
    entry("dolphin", "dolphin.bin"),
    entry("donut", "donut.bin"),
    entry("door", "door.bin"),
    entry("dragon", "dragon.bin"),
    entry("dresser", "dresser.bin"),
    entry("drill", "drill.bin"),
    entry("drums", "drums.bin"),
    entry("duck", "duck.bin"),
    entry("dumbbell", "dumbbell.bin"),
    entry("ear", "ear.bin"),
    entry("elbow", "elbow.bin"),
    entry("elephant", "elephant.bin"),
    entry("envelope", "envelope.bin"),
    entry("eraser", "eraser.bin"),
    entry("eye", "eye.bin"),
    entry("eyeglasses", "eyeglasses.bin"),
    entry("face", "face.bin"),
    entry("fan", "fan.bin"),
    entry("feather", "feather.bin"),
    entry("fence", "fence.bin"),
    entry("finger", "finger.bin"),
    entry("fire hydrant", "fire%20hydrant.bin"),
    entry("fireplace", "fireplace.bin"),
    entry("firetruck", "firetruck.bin"),
    entry("fish", "fish.bin"),
    entry("flamingo", "flamingo.bin"),
    entry("flashlight", "flashlight.bin"),
    entry("flip flops", "flip%20flops.bin"),
    entry("floor lamp", "floor%20lamp.bin"),
    entry("flower", "flower.bin"),
    entry("flying saucer", "flying%20saucer.bin"),
    entry("foot", "foot.bin"),
    entry("fork", "fork.bin"),
    entry("frog", "frog.bin"),
    entry("frying pan", "frying%20pan.bin"),
    entry("garden hose", "garden%20hose.bin"),
    entry("garden", "garden.bin"),
    entry("giraffe", "giraffe.bin"),
    entry("goatee", "goatee.bin"),
    entry("golf club", "golf%20club.bin"),
    entry("grapes", "grapes.bin"),
    entry("grass", "grass.bin"),
    entry("guitar", "guitar.bin"),
    entry("hamburger", "hamburger.bin"),
    entry("hammer", "hammer.bin"),
    entry("hand", "hand.bin"),
    entry("harp", "harp.bin"),
    entry("hat", "hat.bin"),
    entry("headphones", "headphones.bin"),
    entry("hedgehog", "hedgehog.bin"),
    entry("helicopter", "helicopter.bin"),
    entry("helmet", "helmet.bin"),
    entry("hexagon", "hexagon.bin"),
    entry("hockey puck", "hockey%20puck.bin"),
    entry("hockey stick", "hockey%20stick.bin"),
    entry("horse", "horse.bin"),
    entry("hospital", "hospital.bin"),
    entry("hot air balloon", "hot%20air%20balloon.bin"),
    entry("hot dog", "hot%20dog.bin"),
    entry("hot tub", "hot%20tub.bin"),
    entry("hourglass", "hourglass.bin"),
    entry("house plant", "house%20plant.bin"),
    entry("house", "house.bin"),
    entry("hurricane", "hurricane.bin"),
    entry("ice cream", "ice%20cream.bin"),
    entry("jacket", "jacket.bin"),
    entry("jail", "jail.bin"),
    entry("kangaroo", "kangaroo.bin"),
    entry("key", "key.bin"),
    entry("keyboard", "keyboard.bin"),
    entry("knee", "knee.bin"),
    entry("knife", "knife.bin"),
    entry("ladder", "ladder.bin"),
    entry("lantern", "lantern.bin"),
    entry("laptop", "laptop.bin"),
    entry("leaf", "leaf.bin"),
    entry("leg", "leg.bin"),
    entry("light bulb", "light%20bulb.bin"),
    entry("lighter", "lighter.bin"),
    entry("lighthouse", "lighthouse.bin"),
    entry("lightning", "lightning.bin"),
    entry("line", "line.bin"),
    entry("lion", "lion.bin"),
    entry("lipstick", "lipstick.bin"),
    entry("lobster", "lobster.bin"),
    entry("lollipop", "lollipop.bin"),
    entry("mailbox", "mailbox.bin"),
    entry("map", "map.bin"),
    entry("marker", "marker.bin"),
    entry("matches", "matches.bin"),
    entry("megaphone", "megaphone.bin"),
    entry("mermaid", "mermaid.bin"),
    entry("microphone", "microphone.bin"),
    entry("microwave", "microwave.bin"),
    entry("monkey", "monkey.bin"),
    entry("moon", "moon.bin"),
    entry("mosquito", "mosquito.bin"),
    entry("motorbike", "motorbike.bin"),
    entry("mountain", "mountain.bin"),
    entry("mouse", "mouse.bin"),
    entry("moustache", "moustache.bin"),
    entry("mouth", "mouth.bin"),
    entry("mug", "mug.bin"),
    entry("mushroom", "mushroom.bin"),
    entry("nail", "nail.bin"),
    entry("necklace", "necklace.bin"),
    entry("nose", "nose.bin"),
    entry("ocean", "ocean.bin"),
    entry("octagon", "octagon.bin"),
    entry("octopus", "octopus.bin"),
    entry("onion", "onion.bin"),
    entry("oven", "oven.bin"),
    entry("owl", "owl.bin"),
    entry("paint can", "paint%20can.bin"),
    entry("paintbrush", "paintbrush.bin"),
    entry("palm tree", "palm%20tree.bin"),
    entry("panda", "panda.bin"),
    entry("pants", "pants.bin"),
    entry("paper clip", "paper%20clip.bin"),
    entry("parachute", "parachute.bin"),
    entry("parrot", "parrot.bin"),
    entry("passport", "passport.bin"),
    entry("peanut", "peanut.bin"),
    entry("pear", "pear.bin"),
    entry("peas", "peas.bin"),
    entry("pencil", "pencil.bin"),
    entry("penguin", "penguin.bin"),
    entry("piano", "piano.bin"),
    entry("pickup truck", "pickup%20truck.bin"),
    entry("picture frame", "picture%20frame.bin"),
    entry("pig", "pig.bin"),
    entry("pillow", "pillow.bin"),
    entry("pineapple", "pineapple.bin"),
    entry("pizza", "pizza.bin"),
    entry("pliers", "pliers.bin"),
    entry("police car", "police%20car.bin"),
    entry("pond", "pond.bin"),
    entry("pool", "pool.bin"),
    entry("popsicle", "popsicle.bin"),
    entry("postcard", "postcard.bin"),
    entry("potato", "potato.bin"),
    entry("power outlet", "power%20outlet.bin"),
    entry("purse", "purse.bin"),
    entry("rabbit", "rabbit.bin"),
    entry("raccoon", "raccoon.bin"),
    entry("radio", "radio.bin"),
    entry("rain", "rain.bin"),
    entry("rainbow", "rainbow.bin"),
    entry("rake", "rake.bin"),
    entry("remote control", "remote%20control.bin"),
    entry("rhinoceros", "rhinoceros.bin"),
    entry("rifle", "rifle.bin"),
    entry("river", "river.bin"),
    entry("roller coaster", "roller%20coaster.bin"),
    entry("rollerskates", "rollerskates.bin"),
    entry("sailboat", "sailboat.bin"),
    entry("sandwich", "sandwich.bin"),
    entry("saw", "saw.bin"),
    entry("saxophone", "saxophone.bin"),
    entry("school bus", "school%20bus.bin"),
    entry("scissors", "scissors.bin"),
    entry("scorpion", "scorpion.bin"),
    entry("screwdriver", "screwdriver.bin"),
    entry("sea turtle", "sea%20turtle.bin"),
    entry("see saw", "see%20saw.bin"),
    entry("shark", "shark.bin"),
    entry("sheep", "sheep.bin"),
    entry("shoe", "shoe.bin"),
    entry("shorts", "shorts.bin"),
    entry("shovel", "shovel.bin"),
    entry("sink", "sink.bin"),
    entry("skateboard", "skateboard.bin"),
    entry("skull", "skull.bin"),
    entry("skyscraper", "skyscraper.bin"),
    entry("sleeping bag", "sleeping%20bag.bin"),
    entry("smiley face", "smiley%20face.bin"),
    entry("snail", "snail.bin"),
    entry("snake", "snake.bin"),
    entry("snorkel", "snorkel.bin"),
    entry("snowflake", "snowflake.bin"),
    entry("snowman", "snowman.bin"),
    entry("soccer ball", "soccer%20ball.bin"),
    entry("sock", "sock.bin"),
    entry("speedboat", "speedboat.bin"),
    entry("spider", "spider.bin"),
    entry("spoon", "spoon.bin"),
    entry("spreadsheet", "spreadsheet.bin"),
    entry("square", "square.bin"),
    entry("squiggle", "squiggle.bin"),
    entry("squirrel", "squirrel.bin"),
    entry("stairs", "stairs.bin"),
    entry("star", "star.bin"),
    entry("steak", "steak.bin"),
    entry("stereo", "stereo.bin"),
    entry("stethoscope", "stethoscope.bin"),
    entry("stitches", "stitches.bin"),
    entry("stop sign", "stop%20sign.bin"),
    entry("stove", "stove.bin"),
    entry("strawberry", "strawberry.bin"),
    entry("streetlight", "streetlight.bin"),
    entry("string bean", "string%20bean.bin"),
    entry("submarine", "submarine.bin"),
    entry("suitcase", "suitcase.bin"),
    entry("sun", "sun.bin"),
    entry("swan", "swan.bin"),
    entry("sweater", "sweater.bin"),
    entry("swing set", "swing%20set.bin"),
    entry("sword", "sword.bin"),
    entry("syringe", "syringe.bin"),
    entry("t-shirt", "t-shirt.bin"),
    entry("table", "table.bin"),
    entry("teapot", "teapot.bin"),
    entry("teddy-bear", "teddy-bear.bin"),
    entry("telephone", "telephone.bin"),
    entry("television", "television.bin"),
    entry("tennis racquet", "tennis%20racquet.bin"),
    entry("tent", "tent.bin"),
    entry("The Eiffel Tower", "The%20Eiffel%20Tower.bin"),
    entry("The Great Wall of China", "The%20Great%20Wall%20of%20China.bin"),
    entry("The Mona Lisa", "The%20Mona%20Lisa.bin"),
    entry("tiger", "tiger.bin"),
    entry("toaster", "toaster.bin"),
    entry("toe", "toe.bin"),
    entry("toilet", "toilet.bin"),
    entry("tooth", "tooth.bin"),
    entry("toothbrush", "toothbrush.bin"),
    entry("toothpaste", "toothpaste.bin"),
    entry("tornado", "tornado.bin"),
    entry("tractor", "tractor.bin"),
    entry("traffic light", "traffic%20light.bin"),
    entry("train", "train.bin"),
    entry("tree", "tree.bin"),
    entry("triangle", "triangle.bin"),
    entry("trombone", "trombone.bin"),
    entry("truck", "truck.bin"),
    entry("trumpet", "trumpet.bin"),
    entry("umbrella", "umbrella.bin"),
    entry("underwear", "underwear.bin"),
    entry("van", "van.bin"),
    entry("vase", "vase.bin"),
    entry("violin", "violin.bin"),
    entry("washing machine", "washing%20machine.bin"),
    entry("watermelon", "watermelon.bin"),
    entry("waterslide", "waterslide.bin"),
    entry("whale", "whale.bin"),
    entry("wheel", "wheel.bin"),
    entry("windmill", "windmill.bin"),
    entry("wine bottle", "wine%20bottle.bin"),
    entry("wine glass", "wine%20glass.bin"),
    entry("wristwatch", "wristwatch.bin"),
    entry("yoga", "yoga.bin"),
    entry("zebra", "zebra.bin"),
    entry("zigzag", "zigzag.bin"),
];

const fn entry(name: &'static str, file_name: &'static str) -> Category {
    Category { name, file_name }
}

/// Look up a category by name.
pub fn find(name: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.name == name)
}

/// Whether `name` is a known category.
pub fn is_known(name: &str) -> bool {
    find(name).is_some()
}

/// Resolve a category name to its remote file name.
///
/// Fails with [`QuickDrawError::UnknownCategory`] when `name` is not in
/// the catalog. Matching is exact and case-sensitive.
pub fn resolve(name: &str) -> Result<&'static str, QuickDrawError> {
    find(name)
        .map(|c| c.file_name)
        .ok_or_else(|| QuickDrawError::UnknownCategory {
            name: name.to_string(),
        })
}

/// All category names, in catalog order.
pub fn names() -> impl ExactSizeIterator<Item = &'static str> {
    CATEGORIES.iter().map(|c| c.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_345_unique_names() {
        let unique: HashSet<_> = names().collect();
        assert_eq!(unique.len(), CATEGORY_COUNT);
        assert_eq!(names().len(), 345);
    }

    #[test]
    fn resolve_known_category() {
        assert_eq!(resolve("anvil").unwrap(), "anvil.bin");
        assert_eq!(
            resolve("aircraft carrier").unwrap(),
            "aircraft%20carrier.bin"
        );
        assert_eq!(
            resolve("The Great Wall of China").unwrap(),
            "The%20Great%20Wall%20of%20China.bin"
        );
    }

    #[test]
    fn resolve_unknown_category_fails() {
        let err = resolve("not a drawing").unwrap_err();
        assert!(matches!(
            err,
            QuickDrawError::UnknownCategory { ref name } if name == "not a drawing"
        ));
    }

    #[test]
    fn resolve_is_case_sensitive() {
        assert!(resolve("Anvil").is_err());
        assert!(is_known("anvil"));
    }

    #[test]
    fn file_names_never_contain_spaces() {
        for c in CATEGORIES.iter() {
            assert!(!c.file_name.contains(' '), "{}", c.file_name);
            assert!(c.file_name.ends_with(".bin"));
        }
    }
}
