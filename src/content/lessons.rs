//! The shipped lesson storyline.
//!
//! Forty lessons in declaration order. Lesson boundaries between weeks are
//! implicit in the narrative and are not encoded anywhere.

/// One lesson as written in source
#[derive(Debug, Clone, Copy)]
pub struct LessonSeed {
    pub id: u32,
    pub title: &'static str,
    pub intro: &'static str,
    pub challenge: &'static str,
    pub quote: &'static str,
    pub outro: &'static str,
    pub teaser: Option<&'static str>,
}

// ============================================================================
// EMBEDDED LESSON DATA
// ============================================================================

pub static LESSONS: &[LessonSeed] = &[
    LessonSeed {
        id: 1,
        title: "The Hero Awakens",
        intro: "You wake in a quiet village at the edge of the Realm of Code. A glowing terminal hums beside your bed, its cursor blinking as if it has been waiting for you all along.",
        challenge: "Make the terminal speak: write your first program that prints \"Hello, Realm!\" to the screen.",
        quote: "Every legend begins with a single line. Yours begins today.",
        outro: "The words flash across the screen and the village bells ring. The realm has heard its new hero for the first time.",
        teaser: Some("Next time: the Scroll of Variables reveals how to hold onto what you learn."),
    },
    LessonSeed {
        id: 2,
        title: "The Scroll of Variables",
        intro: "Your mentor, Sage Orin, unrolls an ancient scroll covered in labeled boxes. Each box holds something precious, and each label tells you where to find it again.",
        challenge: "Create variables for your hero's name, age and home village, then print a sentence that uses all three.",
        quote: "A name given to a thing is a promise to remember it.",
        outro: "The boxes on the scroll glow with your own words. You can now carry knowledge from one line to the next.",
        teaser: Some("Next time: numbers gather in the Hall of Power."),
    },
    LessonSeed {
        id: 3,
        title: "Numbers of Power",
        intro: "In the Hall of Power, runes float in the air and combine in bursts of light. Adding, subtracting, multiplying, dividing: each rune is a spell of arithmetic.",
        challenge: "Calculate the gold needed to buy three swords at 15 coins each and two shields at 22 coins each, then print the total.",
        quote: "Magic is only math that has not been explained yet.",
        outro: "The merchant nods at your sum. Numbers now bend to your will.",
        teaser: Some("Next time: the Speaking Stones teach you the language of text."),
    },
    LessonSeed {
        id: 4,
        title: "The Speaking Stones",
        intro: "A circle of stones stands in the forest, each carved with letters. When you touch them in order, they speak whole sentences aloud.",
        challenge: "Join strings to build a greeting, change it to uppercase, and print how many characters it contains.",
        quote: "Words are stones. Arrange them well and they will build a bridge.",
        outro: "The stones echo your greeting across the forest. Text is yours to shape.",
        teaser: Some("Next time: the road splits, and you must teach your code to choose."),
    },
    LessonSeed {
        id: 5,
        title: "The Fork in the Road",
        intro: "The path ahead divides in two. A weathered sign reads: \"Only those who can decide may pass.\"",
        challenge: "Write an if/else that sends the hero left when it is day and right when it is night, printing the chosen path.",
        quote: "A hero is not one who never doubts, but one who decides anyway.",
        outro: "Your program chooses without hesitation. The road no longer confuses you.",
        teaser: Some("Next time: the Gatekeeper tests your grasp of truth and falsehood."),
    },
    LessonSeed {
        id: 6,
        title: "The Gatekeeper's Riddle",
        intro: "A stone gatekeeper blocks the bridge. \"Answer true or false,\" it rumbles, \"and combine your answers wisely.\"",
        challenge: "Use and, or and not to decide whether the hero may pass: they need a key and either a torch or a map.",
        quote: "Truth has many doors. Logic is the key ring.",
        outro: "The gatekeeper steps aside with a grinding bow. Your conditions are sound.",
        teaser: Some("Next time: a corridor that never ends, unless you command it to."),
    },
    LessonSeed {
        id: 7,
        title: "The Endless Corridor",
        intro: "Beyond the gate lies a corridor that repeats itself forever. Torches, doors, torches, doors. Only a loop can walk it without getting lost.",
        challenge: "Write a while loop that counts your steps and stops once the hero has walked ten paces.",
        quote: "Repetition is not a trap when you know where it ends.",
        outro: "At the tenth step the corridor opens into daylight. You have tamed repetition.",
        teaser: Some("Next time: your first trial, where everything you have learned is tested."),
    },
    LessonSeed {
        id: 8,
        title: "The First Trial",
        intro: "The village elders gather at the Trial Stone. They want proof that the new hero can combine every skill of the first week.",
        challenge: "Build a small number-guessing game using variables, input, conditions and a loop that ends when the guess is right.",
        quote: "You have not learned many things. You have learned a few things well. That is how strength begins.",
        outro: "The Trial Stone glows gold. The elders cheer, and your name is carved beside the heroes of old.",
        teaser: Some("Next time: a new week begins, and the Counting Stairs rise before you."),
    },
    LessonSeed {
        id: 9,
        title: "The Counting Stairs",
        intro: "A tower of numbered stairs climbs into the clouds. Each step must be counted, and none may be skipped.",
        challenge: "Use a for loop over a range to print every stair number from 1 to 20, marking every fifth stair as a landing.",
        quote: "Climb one step at a time and you will never lose your place.",
        outro: "You reach the top of the tower with perfect count. The clouds part to reveal the road ahead.",
        teaser: Some("Next time: a satchel that can hold more than one thing at once."),
    },
    LessonSeed {
        id: 10,
        title: "The Satchel of Lists",
        intro: "A traveling tinker hands you an enchanted satchel. Whatever you put inside stays in order, and you can reach any item by its place.",
        challenge: "Create a list of five inventory items, add a new one, remove one, and print the item in the third slot.",
        quote: "Order is the difference between a hoard and a collection.",
        outro: "Your satchel holds everything neatly. You will never lose an item again.",
        teaser: Some("Next time: the merchant's ledger demands that you work through whole lists."),
    },
    LessonSeed {
        id: 11,
        title: "The Merchant's Ledger",
        intro: "The market merchant keeps a ledger of prices that stretches across pages. She needs a hero who can read it all at once.",
        challenge: "Loop over a list of prices to find the total, the most expensive item and the number of items under ten coins.",
        quote: "A loop and a list together can count the stars.",
        outro: "The merchant's books balance for the first time in years. She promises you a discount forever.",
        teaser: Some("Next time: you begin writing spells of your own in the Spellbook of Functions."),
    },
    LessonSeed {
        id: 12,
        title: "The Spellbook of Functions",
        intro: "Sage Orin hands you a blank spellbook. \"Every spell you write here,\" they say, \"can be cast again with a single word.\"",
        challenge: "Write a function that takes a hero's name and prints a personalized battle cry, then call it for three heroes.",
        quote: "Write it once, name it well, and it will serve you forever.",
        outro: "Three battle cries echo through the valley. Your first spells are bound in the book.",
        teaser: Some("Next time: spells that give something back."),
    },
    LessonSeed {
        id: 13,
        title: "Echoes of Return",
        intro: "In the Canyon of Echoes, every call comes back changed. A spell that only shouts is weak; a spell that answers is strong.",
        challenge: "Write a function that takes a potion's strength and returns the healing it grants, then use the result in a calculation.",
        quote: "A good spell does not just act. It answers.",
        outro: "The canyon echoes back your numbers. Your functions now return what they create.",
        teaser: Some("Next time: a map where every place is found by its name."),
    },
    LessonSeed {
        id: 14,
        title: "The Map of Keys",
        intro: "An explorer's map marks every town by name, and beside each name is a secret. Finding a secret needs only the right key.",
        challenge: "Build a dictionary that maps town names to their populations, look up one town, and add a new town to the map.",
        quote: "Know the name, and the door will open.",
        outro: "The map redraws itself with your additions. Knowledge is now a lookup away.",
        teaser: Some("Next time: the bridge is broken, and only careful debugging can repair it."),
    },
    LessonSeed {
        id: 15,
        title: "The Broken Bridge",
        intro: "The rope bridge to the eastern lands has collapsed. Its builder left behind a program to rebuild it, but the program is full of mistakes.",
        challenge: "Read the error messages, find the three bugs in the bridge-building code, and fix them until it runs correctly.",
        quote: "An error message is a map to the problem. Read it before you panic.",
        outro: "Plank by plank the bridge reassembles. You have learned that mistakes are clues, not walls.",
        teaser: Some("Next time: the second trial awaits on the far side of the bridge."),
    },
    LessonSeed {
        id: 16,
        title: "The Second Trial",
        intro: "Across the bridge, the Council of Guilds has prepared a harder test. They want a tool that the whole market can use.",
        challenge: "Build an inventory manager with functions to add, remove and list items, storing quantities in a dictionary.",
        quote: "Tools built with care outlive the hands that made them.",
        outro: "The guilds adopt your inventory manager on the spot. A second mark of honor is carved beside your name.",
        teaser: Some("Next time: the Advanced Trials begin in the Forge of Classes."),
    },
    LessonSeed {
        id: 17,
        title: "The Forge of Classes",
        intro: "Deep in the mountain, the Forge shapes blueprints into living things. A single blueprint can create a whole army of knights.",
        challenge: "Define a Knight class with a name, health and a method to take damage, then create two knights and make them spar.",
        quote: "A blueprint is a promise that every copy will be true.",
        outro: "Two knights stand before you, forged from the same design yet each their own. You have mastered creation.",
        teaser: Some("Next time: the Ancients pass their powers down through inheritance."),
    },
    LessonSeed {
        id: 18,
        title: "Inheritance of the Ancients",
        intro: "The Hall of Ancients shows how every great order descends from an older one. A paladin is a knight, but also something more.",
        challenge: "Create a Paladin class that inherits from Knight and adds a heal method, then show both classes working together.",
        quote: "Stand on the shoulders of what came before, and reach further.",
        outro: "Your paladin heals the knight after their duel. The old and the new work side by side.",
        teaser: Some("Next time: the Archive Vaults, where memory outlasts the program."),
    },
    LessonSeed {
        id: 19,
        title: "The Archive Vaults",
        intro: "Beneath the royal library lie vaults of records that survive long after their writers are gone. Programs forget when they end, but files remember.",
        challenge: "Write the hero's journal entries to a file, then read the file back and print each entry with its line number.",
        quote: "What is written down cannot be lost to a closed window.",
        outro: "The archivist stamps your journal and shelves it in the vault. Your progress will never be forgotten.",
        teaser: Some("Next time: a storm of exceptions tests your resilience."),
    },
    LessonSeed {
        id: 20,
        title: "The Storm of Exceptions",
        intro: "A storm rolls over the plains, scattering bad input and missing files in its wake. Programs that cannot weather it crash into the mud.",
        challenge: "Wrap a file read and a number conversion in error handling so your program explains what went wrong instead of crashing.",
        quote: "The storm will come. Build a shelter before it does.",
        outro: "Your program stands firm while the storm passes. Errors are met with calm answers.",
        teaser: Some("Next time: the Library of Modules opens its doors to you."),
    },
    LessonSeed {
        id: 21,
        title: "The Library of Modules",
        intro: "A library holds the work of a thousand heroes, each book a module ready to be borrowed. No hero needs to write everything alone.",
        challenge: "Split your inventory manager into two modules and import the standard library's random module to roll loot drops.",
        quote: "Wisdom is knowing which books to open.",
        outro: "The librarian smiles as your code borrows from the shelves. Your programs are now organized and strong.",
        teaser: Some("Next time: the Oracle speaks in messages from far away."),
    },
    LessonSeed {
        id: 22,
        title: "The Oracle's Messages",
        intro: "The Oracle lives beyond the mountains and answers only in structured messages. Each reply is a bundle of keys and values.",
        challenge: "Parse a JSON message from the Oracle, extract the prophecy and the hero's next destination, and print them.",
        quote: "Even prophecy needs a format to be understood.",
        outro: "The prophecy unfolds in your terminal. You can now talk to worlds beyond your own program.",
        teaser: Some("Next time: everything you have learned converges into a single working system."),
    },
    LessonSeed {
        id: 23,
        title: "The Convergence",
        intro: "At the Crossroads of Realms, every skill you have learned flows together like rivers meeting the sea.",
        challenge: "Combine classes, files and error handling into a quest log that saves quests, loads them at startup and survives bad data.",
        quote: "Skills alone are tools. Skills together are a craft.",
        outro: "Your quest log hums with every technique you know. The rivers have become one sea.",
        teaser: Some("Next time: the third trial, and the end of the Advanced Trials."),
    },
    LessonSeed {
        id: 24,
        title: "The Third Trial",
        intro: "The Arena of the Advanced Trials fills with spectators. The champions of the realm want to see the new hero integrate everything.",
        challenge: "Build a turn-based battle simulator with character classes, saved high scores and graceful handling of invalid moves.",
        quote: "Today you do not prove what you know. You prove what you can build.",
        outro: "The arena roars as your simulator runs flawlessly. The third mark of honor is yours.",
        teaser: Some("Next time: the Master's Path begins with the Sorting Tides."),
    },
    LessonSeed {
        id: 25,
        title: "The Sorting Tides",
        intro: "On the shore of the Sorting Sea, shells wash in out of order. The tide only recedes when they are arranged from smallest to largest.",
        challenge: "Implement a simple sorting algorithm by hand, then compare your result to the language's built-in sort.",
        quote: "Chaos is only order that has not met its algorithm.",
        outro: "The shells line up and the tide pulls back. You understand what happens inside a sort.",
        teaser: Some("Next time: a search in the dark, where halving the problem lights the way."),
    },
    LessonSeed {
        id: 26,
        title: "The Search in the Dark",
        intro: "A lost artifact hides in a sorted vault of a thousand chests. Opening them one by one would take days.",
        challenge: "Write a binary search that finds the artifact's chest number in a sorted list, counting how many chests you opened.",
        quote: "When the path is dark, cut it in half.",
        outro: "You find the artifact in ten tries. The vault keeper has never seen such speed.",
        teaser: Some("Next time: a mirror that reflects itself, again and again."),
    },
    LessonSeed {
        id: 27,
        title: "The Recursive Mirror",
        intro: "In the Hall of Mirrors, each reflection contains a smaller reflection of itself. At the very center is the smallest mirror of all.",
        challenge: "Write a recursive function that computes a factorial, and identify its base case before you run it.",
        quote: "To understand the mirror, first find where it stops reflecting.",
        outro: "The mirrors settle into stillness. Recursion no longer frightens you.",
        teaser: Some("Next time: the Tower of Stacks, where order of arrival matters."),
    },
    LessonSeed {
        id: 28,
        title: "The Tower of Stacks",
        intro: "A wizard's tower stores scrolls in stacks, and a message hall delivers letters in queues. One serves the last to arrive, the other the first.",
        challenge: "Use a stack to reverse a word and a queue to process messages in arrival order, printing each step.",
        quote: "How you store a thing decides how you will find it.",
        outro: "Scrolls and letters move exactly as you command. You know when to stack and when to queue.",
        teaser: Some("Next time: a web of nodes connects every town in the realm."),
    },
    LessonSeed {
        id: 29,
        title: "The Web of Nodes",
        intro: "The realm's towns are connected by roads that form a great web. Travelers need a way to find their path through it.",
        challenge: "Represent towns and roads as a graph and write a breadth-first search that finds a route between two towns.",
        quote: "Every place is connected. The art is in finding the connection.",
        outro: "Your route glows on the realm map. No traveler will be lost again.",
        teaser: Some("Next time: the Clockwork Measure reveals how fast your spells truly are."),
    },
    LessonSeed {
        id: 30,
        title: "The Clockwork Measure",
        intro: "The Clockmaker's workshop is full of gears that measure not time, but effort. Some spells slow down as the world grows larger.",
        challenge: "Time a linear search and a binary search on growing lists, and describe how each one scales.",
        quote: "Fast today is not fast forever. Measure how it grows.",
        outro: "The clockwork gears click into place. You can now predict how your code will behave at scale.",
        teaser: Some("Next time: the Tests of Truth guard your code against future mistakes."),
    },
    LessonSeed {
        id: 31,
        title: "The Tests of Truth",
        intro: "The Guardians of Truth never trust a spell until it has been tested. Their scrolls are full of checks that run every morning.",
        challenge: "Write unit tests for three of your earlier functions, including one test for an edge case that used to fail.",
        quote: "Trust, but test. Then test again.",
        outro: "Every check passes with a green glow. Your code now defends itself.",
        teaser: Some("Next time: the fourth trial, and the end of the Master's Path."),
    },
    LessonSeed {
        id: 32,
        title: "The Fourth Trial",
        intro: "The Masters of the realm present a puzzle vault that can only be opened by efficient, well-tested code.",
        challenge: "Solve the vault puzzle with an algorithm of your choice, explain its efficiency, and prove it correct with tests.",
        quote: "A master is measured not by speed, but by certainty.",
        outro: "The vault opens with a deep chime. The fourth mark of honor shines beside your name.",
        teaser: Some("Next time: the Final Ascent begins with a blueprint of your own."),
    },
    LessonSeed {
        id: 33,
        title: "The Blueprint",
        intro: "At the foot of the final mountain, Sage Orin hands you an empty scroll. \"This time,\" they say, \"you design the quest.\"",
        challenge: "Plan your own project: describe what it does, list its features and sketch the pieces of code it needs.",
        quote: "The greatest heroes write their own quests.",
        outro: "Your blueprint is pinned to the camp wall. The climb to your own creation has begun.",
        teaser: Some("Next time: laying the foundations of your citadel."),
    },
    LessonSeed {
        id: 34,
        title: "Foundations of the Citadel",
        intro: "Every citadel starts with stones that no visitor will ever see. Without them, the towers would fall.",
        challenge: "Build the core data structures and functions of your project, with no user interface yet, and test them.",
        quote: "Build the foundation as if the whole realm will stand on it.",
        outro: "Your foundation holds firm under every test. The walls can rise now.",
        teaser: Some("Next time: your citadel comes alive with a living interface."),
    },
    LessonSeed {
        id: 35,
        title: "The Living Interface",
        intro: "A citadel without gates is a prison. Visitors need a way in, and a way to ask for what they need.",
        challenge: "Add an interface to your project that accepts user commands, validates them and shows helpful responses.",
        quote: "Build for the person at the gate, not only for yourself.",
        outro: "The gates swing open and the first visitors wander in. Your creation can finally be used.",
        teaser: Some("Next time: the Keeper of Records ensures nothing is lost."),
    },
    LessonSeed {
        id: 36,
        title: "The Keeper of Records",
        intro: "The Keeper of Records tends the citadel's memory. When the lanterns go out at night, nothing must be forgotten.",
        challenge: "Make your project save its state to a file and restore it when it starts again, handling a missing or corrupted file.",
        quote: "A citadel that forgets is only a camp.",
        outro: "Your project wakes each morning exactly where it left off. The Keeper is satisfied.",
        teaser: Some("Next time: the Polishing Stone makes good code great."),
    },
    LessonSeed {
        id: 37,
        title: "The Polishing Stone",
        intro: "An old craftsman keeps a smooth stone on his bench. \"A blade that works is good,\" he says. \"A blade that shines is finished.\"",
        challenge: "Refactor your project: rename unclear variables, split long functions and remove repeated code, keeping every test green.",
        quote: "Clean code is a kindness to the hero who reads it next.",
        outro: "Your code gleams like a polished blade. It works exactly as before, only clearer.",
        teaser: Some("Next time: your allies review the citadel."),
    },
    LessonSeed {
        id: 38,
        title: "The Allies' Review",
        intro: "Heroes from distant lands arrive to inspect your citadel. Each brings fresh eyes and honest words.",
        challenge: "Walk a fellow learner through your code, collect their feedback, and apply at least two improvements they suggest.",
        quote: "No hero climbs the last mountain alone.",
        outro: "Your allies leave with respect, and your citadel is stronger for their advice.",
        teaser: Some("Next time: the eve of ascension, when your creation goes out into the realm."),
    },
    LessonSeed {
        id: 39,
        title: "The Eve of Ascension",
        intro: "The night before the ceremony, the whole realm waits to see your creation. It must leave the workshop and stand on its own.",
        challenge: "Package your project so someone else can run it, and write a short guide explaining how to use it.",
        quote: "A creation is complete when it no longer needs its creator to explain it.",
        outro: "Lanterns rise over the citadel as the realm tries your creation for the first time. Tomorrow, you ascend.",
        teaser: Some("Next time: the final lesson, and the hero's ascension."),
    },
    LessonSeed {
        id: 40,
        title: "The Hero Ascends",
        intro: "The whole realm gathers at the summit. Sage Orin stands beside a banner bearing your name and every mark of honor you have earned.",
        challenge: "Present your finished project to the realm and reflect on the journey: what you built, what you learned and what comes next.",
        quote: "You came here a villager with a blinking cursor. You leave as a hero who builds worlds.",
        outro: "The banner unfurls and the crowd erupts. The journey through the lessons is complete, but the hero's story has only begun.",
        teaser: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_ids_are_dense_from_one() {
        for (i, seed) in LESSONS.iter().enumerate() {
            assert_eq!(seed.id as usize, i + 1);
        }
        assert_eq!(LESSONS.len(), 40);
    }

    #[test]
    fn test_only_final_lesson_lacks_teaser() {
        let without: Vec<u32> = LESSONS
            .iter()
            .filter(|s| s.teaser.is_none())
            .map(|s| s.id)
            .collect();
        assert_eq!(without, vec![40]);
    }
}
