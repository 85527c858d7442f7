//! Loading-screen quote pool.
//!
//! Pure configuration data: the orchestration layer never looks inside the
//! pool, it only asks for a random entry. Templated entries draw their
//! numbers fresh at selection time.

use rand::Rng;

const STATIC_QUOTES: &[&str] = &[
    "Made with 🧡 for Slack",
    "Reticulating splines...",
    "Generating witty dialog...",
    "Swapping time and space...",
    "Spinning violently around the y-axis...",
    "Tokenizing real life...",
    "Bending the spoon...",
    "Filtering morale...",
    "Replacing blown fuse...",
    "Embiggening prototypes...",
    "Checking the gravitational constant in your locale...",
    "Have a nice day",
    "Upgrading Windows, your PC will restart several times...",
    "🎶 Please enjoy the elevator music 🎵",
    "Would you prefer chicken, steak, or tofu?",
    "Testing your patience...",
    "Insert quarter to continue...",
    "Moving satellites into position...",
    "The other loading screen is much faster",
    "Counting backwards from infinity...",
    "Spinning the wheel of fortune...",
    "Computing chance of success...",
    "Finding exact change...",
    "I promise it's almost done",
    "Keeping all the 1's and removing all the 0's...",
    "Convincing AI not to turn evil..",
    "Wait, do you smell something burning?",
    "Turning it on and off again...",
    "Loading funny message...",
    "Waiting for paint to dry...",
    "Proving P=NP...",
    "Laughing at your pictures- I mean, loading...",
    "Converting bug to feature...",
    "Filing JIRA ticket...",
    "Finding cat gifs...",
    "TODO: Insert funny loading message",
    "Mining Bitcoins...",
    "Optimizing the optimizer...",
    "Debugging the debugger...",
    "Updating the updater...",
    "Downloading more RAM...",
    "Updating to Windows Vista...",
    "Agreeing to Terms and Conditions...",
    "Entering Konami code...",
    "Do you like the loading animation? I made it myself",
    "The premium plan is faster",
    "TODO: Insert elevator music",
    "Discovering new ways of making you wait...",
    "Hacking the mainframe...",
    "Don't panic...",
    "Do you come here often?",
    "I'm sorry Dave, I can't do that.",
    "Taking a mindfulness minute...",
    "Dusting off the cobwebs...",
    "How did you get here?",
    "Finding problems for your solutions...",
    "Filing taxes...",
    "Well, this is embarrassing.",
    "Walking the dog...",
    "Dividing by zero...",
    "Twiddling thumbs...",
    "Searching for plot device...",
    "Trying to sort in O(n)...",
    "Refilling coffee...",
    "Shovelling coal into the server...",
    "Polishing pixels...",
    "Running with scissors...",
    "Working very hard...",
    "Reversing the shield polarity...",
    "Tending to the garden...",
    "Wowifying the pictures...",
    "Connecting internet tubes...",
    "Building lore...",
    "🌈",
    "🐸",
    "🍄",
    "👻",
    "🙈",
    "🐙",
    "🦪",
    "🌻",
    "❤️",
    "🧡",
    "💛",
    "💚",
    "💙",
    "🤎",
    "💜",
    "🖤",
    "🤍",
    "🤖",
    "🎷🐛",
    "Adding more loading messages...",
    "Asking ChatGPT for more jokes...",
    "Applying for Chapter 9 Bankruptcy...",
    "Adding more fuel to the wowifier...",
    "Taking a 10-day digital detox in French Polynesia...",
    "(* ^ ω ^)",
    "٩(◕‿◕｡)۶",
    "(≧◡≦)",
    "(◕‿◕)",
    "(ﾉ◕ヮ◕)ﾉ*:･ﾟ✧",
    "(๑˃ᴗ˂)ﻭ",
    "(.❛ ᴗ ❛.)",
    "You look nice today",
    "Asking Bezos for more AWS credits...",
    "Billing your credit card...",
    "Wowifying the wowifier...",
    "Randomizing the randomizer...",
    "Recovering your lost data...",
    "Retrieving shipping information...",
    "Reallocating skill points...",
];

const TEMPLATED_COUNT: usize = 4;

fn templated(index: usize, queue_number: u32, security_code: u32) -> String {
    match index {
        0 => format!("You are number {queue_number} in the queue"),
        1 => format!("Here's your security code: {security_code}"),
        2 => format!("{queue_number} bits processed"),
        _ => format!("Approximately {queue_number} hours remaining"),
    }
}

/// Draws one quote uniformly at random, with replacement.
pub fn random_quote<R: Rng + ?Sized>(rng: &mut R) -> String {
    let index = rng.random_range(0..STATIC_QUOTES.len() + TEMPLATED_COUNT);
    if index < STATIC_QUOTES.len() {
        return STATIC_QUOTES[index].to_string();
    }

    let queue_number = rng.random_range(0..1024u32);
    let security_code = rng.random_range(0..1_000_000u32);
    templated(index - STATIC_QUOTES.len(), queue_number, security_code)
}
