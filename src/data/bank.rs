use crate::models::{Question, QuestionBank, QuestionError};

const REFERENCE_QUESTIONS: [(&str, [&str; 4], &str); 15] = [
    (
        "What is SpongeBob's job at the Krusty Krab?",
        ["Dishwasher", "Cashier", "Fry Cook", "Security"],
        "Fry Cook",
    ),
    (
        "Who is known as SpongeBob's pink best friend?",
        ["Patrick", "Sandy", "Squidward", "Bubble Buddy"],
        "Patrick",
    ),
    (
        "What kind of home does SpongeBob live in?",
        ["Boat", "Rock", "Pineapple", "Cave"],
        "Pineapple",
    ),
    (
        "What instrument is Squidward always playing?",
        ["Saxophone", "Clarinet", "Violin", "Flute"],
        "Clarinet",
    ),
    (
        "Which character runs the Chum Bucket?",
        ["Plankton", "Mr. Krabs", "Karen", "Larry"],
        "Plankton",
    ),
    (
        "SpongeBob has a pet snail. What's his name?",
        ["Speedy", "Gary", "Slimy", "Jerry"],
        "Gary",
    ),
    (
        "How many eyelashes does SpongeBob have?",
        ["6", "8", "3", "4"],
        "6",
    ),
    (
        "Where does SpongeBob work?",
        ["Krusty Krab", "Chum Bucket", "Shell Shack", "Goofy Goober's"],
        "Krusty Krab",
    ),
    (
        "Who yells \"STILL NO PICKLES!?\" in a classic episode?",
        ["Fred", "Bubble Bass", "Mr. Krabs", "Squidward"],
        "Bubble Bass",
    ),
    (
        "What phrase is DoodleBob known for saying?",
        ["Meep morp!", "LEEDLE", "Mi hoy minoy!", "MY LEG"],
        "Mi hoy minoy!",
    ),
    (
        "What is Sandy's full name?",
        ["Sandy Cheeks", "Sandy Squirrel", "Sandy Texas", "Sandy Light bulbs"],
        "Sandy Cheeks",
    ),
    (
        "What did Sandy fight that scared Bikini Bottom?",
        ["Sea Bear", "Alaskan Bull Worm", "Kraken", "Flying Dutchman"],
        "Alaskan Bull Worm",
    ),
    (
        "What activity do SpongeBob and Patrick love?",
        ["Karate", "Jellyfishing", "Clam catching", "Surfing"],
        "Jellyfishing",
    ),
    (
        "Who teaches boating school?",
        ["Mrs. Krabs", "Mrs. Puff", "Mr. Flounder", "Miss Coral"],
        "Mrs. Puff",
    ),
    (
        "What is SpongeBob trying to earn at boating school?",
        ["Trophy", "Medal", "License", "Sticker"],
        "License",
    ),
];

/// The built-in 15-question bank.
pub fn reference_bank() -> Result<QuestionBank, QuestionError> {
    let questions = REFERENCE_QUESTIONS
        .iter()
        .map(|(text, choices, correct)| {
            Question::new(*text, choices.map(String::from), *correct)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(QuestionBank::new(questions))
}
