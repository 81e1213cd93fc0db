use hashbrown::HashMap;
use regex::Regex;
use std::borrow::Cow;

/// Outcome of an exact dictionary lookup.
///
/// An empty target string in the source data is a deliberate instruction to blank the
/// matched text, so it is surfaced as its own variant instead of an empty `Translated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exact<'a> {
	/// The text is not an exact key.
	Miss,
	/// The text maps to a replacement.
	Translated(&'a str),
	/// The text maps to "display nothing".
	Blanked,
}

/// A find/template-replace rule applied to text that missed the exact table.
///
/// Rules run in list order, each over the output of the previous one, replacing every
/// non-overlapping match. Templates reference capture groups as `$1`, `$2`, ….
#[derive(Debug)]
struct PatternRule {
	regex: Regex,
	template: &'static str,
}

/// Immutable translation table: an exact-match map plus an ordered pattern-rule list.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug)]
pub struct Dictionary {
	exact: HashMap<&'static str, &'static str>,
	rules: Vec<PatternRule>,
}

impl Dictionary {
	/// Builds a dictionary from `(source, target)` pairs and `(pattern, template)` rules.
	///
	/// An empty `target` marks the source text for blanking. Later duplicate sources win.
	///
	/// # Panics
	///
	/// Iff a pattern is not a valid regular expression.
	#[must_use]
	pub fn new(exact: &[(&'static str, &'static str)], rules: &[(&'static str, &'static str)]) -> Self {
		Self {
			exact: exact.iter().copied().collect(),
			rules: rules
				.iter()
				.map(|&(pattern, template)| PatternRule {
					regex: Regex::new(pattern).expect("invalid pattern rule"),
					template,
				})
				.collect(),
		}
	}

	/// The built-in English → Icelandic gameplay dictionary.
	#[must_use]
	pub fn icelandic() -> Self {
		Self::new(EXACT_TEXTS, PATTERN_RULES)
	}

	/// Looks `text` up in the exact table only. Pattern rules are not consulted.
	#[must_use]
	pub fn exact(&self, text: &str) -> Exact<'_> {
		match self.exact.get(text) {
			None => Exact::Miss,
			Some(&"") => Exact::Blanked,
			Some(&target) => Exact::Translated(target),
		}
	}

	/// Translates `text`: exact matches short-circuit, everything else runs through the
	/// pattern rules in order.
	///
	/// Returns [`Cow::Borrowed`] when no rule changed the text, so callers can skip
	/// writing unchanged content back to the document.
	#[must_use]
	pub fn translate<'t>(&'t self, text: &'t str) -> Cow<'t, str> {
		match self.exact(text) {
			Exact::Translated(target) => return Cow::Borrowed(target),
			Exact::Blanked => return Cow::Borrowed(""),
			Exact::Miss => (),
		}

		let mut result = String::from(text);
		for rule in &self.rules {
			result = rule.regex.replace_all(&result, rule.template).into_owned();
		}
		if result == text {
			Cow::Borrowed(text)
		} else {
			Cow::Owned(result)
		}
	}
}

/// Texts replaced only on byte-for-byte equality, spacing included.
///
/// An empty target suppresses the text entirely.
const EXACT_TEXTS: &[(&str, &str)] = &[
	("Loading…", "Hleður…"),
	// Host screen.
	("Get ready to join", "Vertu tilbúinn til að taka þátt"),
	("Loading Game PIN", "Hleður PIN-númer leiksins"),
	("Join at ", "Skráðu þig á "),
	("or with the ", "eða í "),
	("Kahoot! app", "Kahoot! appinu"),
	("This game is locked", "Þessi leikur er læst"),
	("No one else can join", "Enginn annar getur verið með"),
	("Waiting for players…", "Bíðum eftir leikmönnum…"),
	("Game PIN: ", "PIN-númer leiksins: "),
	("Game PIN:", "PIN-númer leiksins:"),
	("Start", "Byrja"),
	("Scoreboard", "Stigatafla"),
	("Podium", "Verðlaunapallur"),
	("Drum roll…", "Trommusláttur…"),
	("Next", "Næst"),
	("Skip", "Sleppa"),
	("Quiz", "Spurningakeppni"),
	("True or false", "Satt eða ósatt"),
	("True", "Satt"),
	("False", "Ósatt"),
	("Type answer", "Sláðu inn svar"),
	("Players, type your answer!", "Sláðu inn svarið þitt!"),
	("Type your answer here", "Sláðu inn svarið þitt hér!"),
	("Your answer might be displayed on the big screen", ""),
	("Submit", "Leggja fram"),
	("Answer", "Svar"),
	("Answers", "Svör"),
	("This edition of Kahoot! is limited to personal use.", "Do whatever you want with the free version of Kahoot!"),
	("Upgrade to use for commercial purposes", "Optionally, click here to throw some money away."),
	// Player side.
	("Get Ready!", "Vertu tilbúinn!"),
	("Correct", "Rétt!"),
	("Incorrect", "Rangt!"),
	("Time's up", "Þú kláraðir tíma!"),
	("Answer Streak", "Rétt Svarlína"),
	("Answer Streak lost", "Þú missti rétt svarlínuna þinni!"),
	("You're on the podium!", "Þú ert á verðlaunapalli!"),
	// Joining in the middle of a running game.
	("Get ready!", "Vertu tilbúinn!"),
	("You'll be able to join soon", "Þú getur tekið þátt fljótlega"),
	("Game PIN", "PIN-númer leiksins"),
	("Nickname", "Gælunafn"),
	("Checking your nickname", "Augnablik"),
	("You're in!", "Þú ert inni!"),
	("See your nickname on screen?", "Sérðu gælunafnið þitt á skjánum?"),
	("Enter", "Fara inn"),
	("Connecting to Kahoot!", "Tengist við Kahoot!"),
	("OK, go!", "Áfram"),
	("We didn't recognize that game PIN. Please check and try again.", "Þú slóst inn rangt PIN-númer!"),
	("Your nickname has been updated", "Gælunafni þínu var breytt!"),
	("Oh, no! You've been kicked out of the game.", "Gestgjafinn fjarlægði þig."),
	("Oops! You need to enter a game PIN before you can play", "Þú þarft að slá inn PIN-númer"),
	("Your network is slow, so you might experience delays", ""),
	("Create your own kahoot for FREE at ", "Búa til kahoot þitt á "),
	("Terms", "Skilmálar"),
	("Privacy", "Friðhelgisstefna"),
	// Podium flavour text without a good Icelandic equivalent.
	("Genius machine?", ""),
	("Pure genius?", ""),
	("Lightning smart?", ""),
	("Classroom perfection?", ""),
	("Great try.", ""),
	("We believe in you!", ""),
	("Dig deep on the next one!", ""),
	("It's not over just yet!", ""),
	("Dust yourself off. Greatness awaits!", ""),
	("No one said it would be easy 😉", ""),
	("Nothing worth having comes easy!", ""),
	("Epic win!", ""),
	// The countdown shown on the game-PIN screen, drawn as per-character SVG text.
	("Ready…", ""),
	("Set…", ""),
	("Go!", ""),
];

/// Ordered pattern rules for texts with variable parts. All of them run, in order,
/// against the running result.
const PATTERN_RULES: &[(&str, &str)] = &[
	(r"(\d+) out of (\d+)", "$1 af $2"),
	(r"(\d+) of (\d+)", "$1 af $2"),
	(r"Question\s(\d+)", "Spurning $1"),
	(r"(\d+)(st|nd|rd|th) place", "$1. sæti"),
	(r"(\d+) points behind (.*)", "$1 stigum á eftir $2"),
];
