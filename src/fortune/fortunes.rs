//! Built-in fortunes and the lucky numbers footer.

use rand::Rng;
use rand::seq::{IndexedRandom, index};

/// Built-in fortune texts: the classic cookie lines, then the house list.
pub const FORTUNES: &[&str] = &[
    "You cannot shake hands with a clenched fist.",
    "Perhaps you will forget tomorrow the kind words you say today, but the recipient may cherish them over a lifetime.",
    "A surprise gift will be yours.",
    "Your hard work will pay off soon.",
    "Adventure awaits around the corner.",
    "Good things come to those who wait.",
    "You will commit a very small crime against productivity.",
    "Today's plan is mostly 'we'll see.'",
    "Something silly works suspiciously well.",
    "You are running on confidence and snacks.",
    "A bad idea shows up wearing a fun hat.",
    "You will laugh at the wrong moment. It improves the moment.",
    "Mischief checks your calendar and moves in.",
    "You pretend this was the plan the whole time.",
    "A tiny chaos goblin applauds your choices.",
    "You accidentally start a joke that lasts all day.",
    "Today has strong 'oops, fun' energy.",
    "You are doing bits. Everyone notices.",
    "A shortcut leads somewhere unexpected but delightful.",
    "You break nothing important. Probably.",
    "Your seriousness takes the day off.",
    "You will say 'watch this' and survive.",
    "Something dumb becomes your favorite part.",
    "The vibes are doing the steering now.",
    "You win by being lightly ridiculous.",
    "This fortune is giggling and refuses to explain.",
    "A silly detour improves the plot.",
    "You misjudge something - in a funny way.",
    "Today's energy is 'confident shrug.'",
    "You trip over nothing and land in a good mood.",
    "A joke you don't tell is still funny.",
    "You are accidentally the fun one today.",
    "A harmless rule looks the other way.",
    "You will clap for yourself internally.",
    "Something minor becomes extremely amusing.",
    "You get away with it because no one's mad.",
    "You are doing just enough. Miraculous.",
    "Today is powered by mild chaos.",
    "A tiny win demands a tiny celebration.",
    "You smile first and figure it out later.",
    "A nonsense idea improves morale.",
    "You are underqualified but enthusiastic. Perfect.",
    "Someone laughs because of you. Success.",
    "You misunderstand something and it helps.",
    "The moment is funnier than expected.",
    "This was not on the agenda. Nice.",
    "You will make a sound effect for no reason.",
    "A dramatic pause goes unanswered. Still satisfying.",
    "You choose the fun option. Again.",
    "Today's confidence is mostly pretend. It works.",
    "A joke lands sideways and that's better.",
    "You nod like you meant that.",
    "Something works despite your involvement.",
    "You survive a 'why did I do that?' moment.",
    "A small chaos sparkles briefly.",
    "You laugh, then pretend you didn't.",
    "You are lightly unserious on purpose.",
    "A plan changes hats mid-sentence.",
    "You take a risk the size of a peanut.",
    "Today's logic is on vacation.",
    "You confuse enthusiasm with competence. Still fine.",
    "A silly choice ages well.",
    "You almost behave. Almost.",
    "Something funny sneaks past you.",
    "You improvise confidently and exit.",
    "The mood improves for unclear reasons.",
    "You are accidentally charming.",
    "A non-problem becomes a joke.",
    "You forget what you were worried about.",
    "A tiny rebellion goes unnoticed.",
    "You celebrate too early. Still counts.",
    "Something feels wrong but fun.",
    "You commit to the bit.",
    "Today has excellent side-quest energy.",
    "You confuse everyone briefly. Delightful.",
    "A shortcut turns scenic.",
    "You leave things slightly better and sillier.",
    "A moment deserves jazz hands.",
    "You grin and no one asks questions.",
    "Something dumb pays off immediately.",
    "You pretend you're not pleased.",
    "The vibes approve.",
    "You do a little victory nod.",
    "A weird idea clocks in early.",
    "You laugh at your own timing.",
    "This fortune is proud of you.",
    "You make it work by winging it.",
    "A tiny surprise improves your day.",
    "You accidentally pick the right song.",
    "Today is going off-script.",
    "You enjoy the confusion.",
    "A joke lives rent-free all afternoon.",
    "You break the ice by slipping on it.",
    "Something small becomes legendary (to you).",
    "You do not explain yourself. Correct.",
    "This counts as a win.",
    "You are doing fine. Suspiciously fine.",
    "A nonsense decision feels correct.",
    "You laugh before you understand.",
    "Today's success is mostly vibes.",
    "You cause joy without documentation.",
    "A little chaos improves the flavor.",
    "You survive entirely on 'eh, why not.'",
    "You do the funny version.",
    "Everything is okay enough.",
    "This fortune high-fives you and vanishes.",
];

/// How many lucky numbers a slip carries.
pub const LUCKY_COUNT: usize = 6;
/// Lucky numbers are drawn from `1..=LUCKY_MAX`.
pub const LUCKY_MAX: u8 = 99;

/// Draw distinct lucky numbers, sorted ascending.
pub fn lucky_numbers<R: Rng + ?Sized>(rng: &mut R) -> [u8; LUCKY_COUNT] {
    let mut numbers = [0u8; LUCKY_COUNT];
    let picks = index::sample(rng, LUCKY_MAX as usize, LUCKY_COUNT);
    for (slot, i) in numbers.iter_mut().zip(picks) {
        *slot = i as u8 + 1;
    }
    numbers.sort_unstable();
    numbers
}

/// Append the lucky numbers footer, separated by a blank line.
///
/// ```
/// use fortuna::fortune::fortunes::format_with_numbers;
///
/// let text = format_with_numbers("A surprise gift will be yours.", &[3, 14, 15, 26, 53, 58]);
/// assert_eq!(text, "A surprise gift will be yours.\n\nLucky numbers: 3, 14, 15, 26, 53, 58");
/// ```
pub fn format_with_numbers(fortune: &str, numbers: &[u8]) -> String {
    let list: Vec<String> = numbers.iter().map(|n| n.to_string()).collect();
    format!("{}\n\nLucky numbers: {}", fortune, list.join(", "))
}

/// `fortune` with freshly drawn lucky numbers.
pub fn with_lucky_numbers<R: Rng + ?Sized>(fortune: &str, rng: &mut R) -> String {
    format_with_numbers(fortune, &lucky_numbers(rng))
}

/// Pick one fortune uniformly, falling back to the built-in list when
/// `fortunes` is empty.
pub fn choose<'a, R: Rng + ?Sized>(fortunes: &'a [String], rng: &mut R) -> &'a str {
    match fortunes.choose(rng) {
        Some(f) => f.as_str(),
        None => FORTUNES.choose(rng).copied().unwrap_or(FORTUNES[0]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_lucky_numbers_distinct_sorted_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let numbers = lucky_numbers(&mut rng);
            assert!(numbers.windows(2).all(|w| w[0] < w[1]), "{:?}", numbers);
            assert!(numbers.iter().all(|&n| (1..=LUCKY_MAX).contains(&n)));
        }
    }

    #[test]
    fn test_footer_is_separated_by_blank_line() {
        let mut rng = StdRng::seed_from_u64(1);
        let text = with_lucky_numbers("Good things come to those who wait.", &mut rng);
        let (fortune, footer) = text.split_once("\n\n").unwrap();
        assert_eq!(fortune, "Good things come to those who wait.");
        assert!(footer.starts_with("Lucky numbers: "));
        assert_eq!(footer.matches(", ").count(), LUCKY_COUNT - 1);
    }

    #[test]
    fn test_choose_from_configured_list() {
        let mut rng = StdRng::seed_from_u64(3);
        let list = vec!["only one".to_string()];
        assert_eq!(choose(&list, &mut rng), "only one");
    }

    #[test]
    fn test_choose_falls_back_to_builtin() {
        let mut rng = StdRng::seed_from_u64(3);
        let picked = choose(&[], &mut rng);
        assert!(FORTUNES.contains(&picked));
    }

    #[test]
    fn test_builtin_fortunes_are_printable_ascii() {
        for fortune in FORTUNES {
            assert!(fortune.is_ascii(), "{}", fortune);
            assert!(!fortune.trim().is_empty());
        }
    }
}
