//! Static fact lists for Anteater Facts
//!
//! This module contains the fallback facts that are always available offline
//! and the fixed list of facts reported after a successful fetch of the fact
//! page.

/// Facts that are always available, even when the fact page is unreachable
///
/// Mixes real anteater facts with Qodo Anteater promotional facts. This list
/// is never mutated after startup.
pub static FALLBACK_FACTS: [&str; 10] = [
    "Anteaters can eat up to 30,000 ants in a single day! 🐜",
    "Qodo Anteater never bugs out — it just sniffs out bugs!",
    "Anteaters have tongues that can be up to 2 feet long. Imagine debugging with that!",
    "The Qodo Anteater is immune to code spaghetti. It just slurps it up! 🍝",
    "Anteaters have no teeth, but Qodo Anteater has byte-sized wisdom.",
    "Anteaters are solitary, but Qodo Anteater loves to pair program!",
    "If you see an anteater in your codebase, expect quality to go up!",
    "Anteaters use their claws to dig — Qodo Anteater digs into your code for insights!",
    "Anteaters are zen masters of focus. So is Qodo Anteater when reviewing PRs.",
    "Qodo Anteater: The only dev who brings their own snacks to standup.",
];

/// Facts reported after a successful fetch of the fact page
///
/// The page itself is never parsed: a successful request always yields this
/// fixed list of ten giant anteater facts plus three promotional facts.
pub static FETCHED_FACTS: [&str; 13] = [
    "Giant anteaters can grow to be 1.8-2.4 meters (6-8 ft.) from nose to tail and weigh between 25-45 kg (55-100 lbs.). 🐜",
    "Giant anteaters have brown fur with black stripes and white front legs. They shuffle walk on the knuckles of their front legs to keep their claws sharp. 🐜",
    "Anteaters' tongues are a little more than 60 cm (2 ft.) long and covered with sticky saliva. 🐜",
    "Giant anteaters can slurp up ants and termites up to 150 times in a minute. 🐜",
    "Giant anteaters can eat 30,000 to 35,000 ants or termites a day. 🐜",
    "Giant anteaters rarely drink water. Most of their water comes from their food. 🐜",
    "Baby anteaters (pups) look like tiny versions of their parents which helps them blend in when they ride on their mother's back. 🐜",
    "Pups cuddle under their mother's legs and nurse when they are not traveling around. 🐜",
    "After 6-9 months, the pups stop riding on their mothers back and stop nursing. 🐜",
    "By 2 years old, young anteaters are on their own completely. 🐜",
    "Qodo Anteater never bugs out — it just sniffs out bugs!",
    "The Qodo Anteater is immune to code spaghetti. It just slurps it up! 🍝",
    "Qodo Anteater: The only dev who brings their own snacks to standup.",
];

/// Get the fallback fact list
///
/// # Returns
///
/// Returns a static slice containing all 10 fallback facts
pub fn fallback_facts() -> &'static [&'static str] {
    &FALLBACK_FACTS
}

/// Get the fact list reported after a successful fetch
///
/// # Returns
///
/// Returns a static slice containing all 13 fetched facts
pub fn fetched_facts() -> &'static [&'static str] {
    &FETCHED_FACTS
}
