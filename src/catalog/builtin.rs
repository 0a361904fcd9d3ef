//! Built-in conversation starters.

use super::Category;

const DEEP: &[&str] = &[
    "What's a belief you held strongly five years ago that you've since changed?",
    "What does a truly good day look like to you?",
    "When do you feel most like yourself?",
    "What's something you're still trying to forgive yourself for?",
    "Which person shaped who you are the most, and how?",
    "What fear has held you back the longest?",
    "What do you think people misunderstand about you?",
    "If you could relive one moment from our relationship, which would it be?",
    "What does home mean to you?",
    "What's a question you wish people asked you more often?",
    "How do you want to be remembered?",
    "What's one thing you've learned about love from watching others?",
];

const SPORTS: &[&str] = &[
    "Which sport would you pick up if you had unlimited time to train?",
    "What's the most memorable game you've ever watched live?",
    "Who is an athlete you admire for more than their talent?",
    "Would you rather win an Olympic gold or a World Cup?",
    "What sport did you play as a kid, and why did you stop?",
    "Which sporting event should we attend together someday?",
    "What's a sport you think is underrated?",
    "If we formed a doubles team, which sport would we dominate?",
    "What's your most embarrassing moment playing a sport?",
    "Do you prefer watching sports at home or in a stadium?",
];

const INTIMATE: &[&str] = &[
    "What's a small gesture from me that makes you feel desired?",
    "When do you feel closest to me physically?",
    "What's something new you'd like us to try together?",
    "What mood or setting makes you feel most relaxed with me?",
    "Is there anything you've wanted to tell me but felt shy about?",
    "What does intimacy mean to you beyond the physical?",
    "What's your favorite memory of us being close?",
    "How do you like to be touched when you've had a hard day?",
    "What makes you feel most confident in your own skin?",
    "What's one thing I do that you wish I did more often?",
];

const FLIRTY: &[&str] = &[
    "What was your first impression of me, honestly?",
    "What's the cheesiest pickup line that would actually work on you?",
    "Which outfit of mine is your favorite?",
    "When did you first realize you had a crush on me?",
    "What's something about me that still gives you butterflies?",
    "If we were meeting for the first time tonight, how would you flirt with me?",
    "What's your favorite feature of mine?",
    "Describe our perfect date night in three words.",
    "What song reminds you of me?",
    "What's the most attractive thing I've ever done without realizing it?",
];

const TRAVEL: &[&str] = &[
    "If we could move to any city for a year, where would we go?",
    "What's the best trip you've ever taken, and what made it special?",
    "Beach, mountains, or city: which do you choose for our next getaway?",
    "Which country's food would you travel just to eat?",
    "What's a place you visited that completely surprised you?",
    "Would you rather backpack for a month or stay at a luxury resort for a week?",
    "What's the worst travel mishap you've had?",
    "Where should we go for our next anniversary?",
    "Is there a place from your childhood you'd like to show me?",
    "What's one travel habit of yours that you'll never give up?",
];

const FUTURE: &[&str] = &[
    "Where do you see us in five years?",
    "What's one goal you want us to achieve together this year?",
    "What kind of home do you picture us living in someday?",
    "How do you imagine our ideal weekend when we're retired?",
    "What's a skill you'd love for us to learn together?",
    "What tradition would you like us to start?",
    "How do you feel about the balance between career and family?",
    "What's something you want to have accomplished by the time you're fifty?",
    "If money were no object, what would our life look like?",
    "What does a successful life mean to you?",
];

const ENTERTAINMENT: &[&str] = &[
    "Which movie could you watch over and over without getting bored?",
    "What TV show should we binge together next?",
    "Who would play each of us in a movie about our relationship?",
    "What's a song that always lifts your mood?",
    "Which book changed the way you think?",
    "What concert would you travel across the country to see?",
    "Which fictional world would you most like to live in?",
    "What's your guilty-pleasure show?",
    "If we started a podcast together, what would it be about?",
    "Which video game or board game brings out your competitive side?",
];

const FOOD: &[&str] = &[
    "What dish reminds you most of home?",
    "If you could only eat one cuisine for the rest of your life, which one?",
    "What's a recipe we should learn to cook together?",
    "What's the best meal you've ever had?",
    "Sweet or savory breakfast?",
    "What food did you hate as a kid but love now?",
    "What would be on the menu for our dream dinner party?",
    "Which restaurant should we go back to for a special occasion?",
    "What's your ultimate comfort food after a long day?",
    "What's the most adventurous thing you've ever eaten?",
];

const CHILDHOOD: &[&str] = &[
    "What was your favorite toy growing up?",
    "What did you want to be when you grew up?",
    "What's your favorite childhood holiday memory?",
    "Who was your best friend as a kid, and what did you do together?",
    "What's a family tradition you want to carry on?",
    "What got you in the most trouble as a child?",
    "What cartoon did you never miss?",
    "What's a smell that instantly takes you back to being a kid?",
    "What were you most afraid of when you were little?",
    "What's a lesson from your parents that stuck with you?",
];

/// Reference categories in tab order.
pub(super) fn categories() -> Vec<Category> {
    [
        ("deep", "Deep Conversation", DEEP),
        ("sports", "Sports", SPORTS),
        ("intimate", "Intimate & Sex", INTIMATE),
        ("flirty", "Flirty", FLIRTY),
        ("travel", "Travel", TRAVEL),
        ("future", "Future Plans", FUTURE),
        ("entertainment", "Entertainment", ENTERTAINMENT),
        ("food", "Food & Cooking", FOOD),
        ("childhood", "Childhood", CHILDHOOD),
    ]
    .into_iter()
    .map(|(key, name, topics)| Category::new(key, name, topics.iter().copied()))
    .collect()
}
