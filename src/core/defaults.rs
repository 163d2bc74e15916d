//! Built-in quote list used whenever no usable override file exists

use crate::core::data::Quote;

const DEFAULT_QUOTES: &[(&str, &str)] = &[
    ("Be the change you wish to see in the world.", "Mahatma Gandhi"),
    ("The only way to do great work is to love what you do.", "Steve Jobs"),
    ("Stay hungry, stay foolish.", "Steve Jobs"),
    ("Innovation distinguishes between a leader and a follower.", "Steve Jobs"),
    ("Simplicity is the ultimate sophistication.", "Leonardo da Vinci"),
    ("The journey of a thousand miles begins with one step.", "Lao Tzu"),
    ("It does not matter how slowly you go as long as you do not stop.", "Confucius"),
    ("Whether you think you can or you think you can't, you're right.", "Henry Ford"),
    (
        "The best time to plant a tree was 20 years ago. The second best time is now.",
        "Chinese Proverb",
    ),
    ("Believe you can and you're halfway there.", "Theodore Roosevelt"),
    ("Do what you can, with what you have, where you are.", "Theodore Roosevelt"),
    ("Act as if what you do makes a difference. It does.", "William James"),
    (
        "Success is not final, failure is not fatal: it is the courage to continue that counts.",
        "Winston Churchill",
    ),
    ("If you're going through hell, keep going.", "Winston Churchill"),
    ("The future belongs to those who believe in the beauty of their dreams.", "Eleanor Roosevelt"),
    ("No one can make you feel inferior without your consent.", "Eleanor Roosevelt"),
    ("It always seems impossible until it's done.", "Nelson Mandela"),
    ("In the middle of every difficulty lies opportunity.", "Albert Einstein"),
    ("Imagination is more important than knowledge.", "Albert Einstein"),
    (
        "Life is like riding a bicycle. To keep your balance you must keep moving.",
        "Albert Einstein",
    ),
    ("What you do today can improve all your tomorrows.", "Ralph Marston"),
    ("Quality is not an act, it is a habit.", "Aristotle"),
    ("Well begun is half done.", "Aristotle"),
    ("The secret of getting ahead is getting started.", "Mark Twain"),
    (
        "Twenty years from now you will be more disappointed by the things that you didn't do than by the ones you did do.",
        "Mark Twain",
    ),
    ("You miss 100% of the shots you don't take.", "Wayne Gretzky"),
    ("I have not failed. I've just found 10,000 ways that won't work.", "Thomas Edison"),
    ("Genius is one percent inspiration and ninety-nine percent perspiration.", "Thomas Edison"),
    ("The mind is everything. What you think you become.", "Buddha"),
    ("Everything you've ever wanted is on the other side of fear.", "George Addair"),
    ("Hardships often prepare ordinary people for an extraordinary destiny.", "C.S. Lewis"),
    ("You are never too old to set another goal or to dream a new dream.", "C.S. Lewis"),
    ("Dream big and dare to fail.", "Norman Vaughan"),
    ("Start where you are. Use what you have. Do what you can.", "Arthur Ashe"),
    ("Action is the foundational key to all success.", "Pablo Picasso"),
    ("Everything you can imagine is real.", "Pablo Picasso"),
    (
        "The only limit to our realization of tomorrow is our doubts of today.",
        "Franklin D. Roosevelt",
    ),
    ("Keep your face always toward the sunshine and shadows will fall behind you.", "Walt Whitman"),
    ("The way to get started is to quit talking and begin doing.", "Walt Disney"),
    ("If you can dream it, you can do it.", "Walt Disney"),
    ("Don't watch the clock; do what it does. Keep going.", "Sam Levenson"),
    (
        "Perfection is not attainable, but if we chase perfection we can catch excellence.",
        "Vince Lombardi",
    ),
    ("It is during our darkest moments that we must focus to see the light.", "Aristotle Onassis"),
    ("A person who never made a mistake never tried anything new.", "Albert Einstein"),
    ("Courage is grace under pressure.", "Ernest Hemingway"),
    ("The best way to predict the future is to invent it.", "Alan Kay"),
    ("Talk is cheap. Show me the code.", "Linus Torvalds"),
    ("First, solve the problem. Then, write the code.", "John Johnson"),
    (
        "Programs must be written for people to read, and only incidentally for machines to execute.",
        "Harold Abelson",
    ),
    ("Make it work, make it right, make it fast.", "Kent Beck"),
    ("Simplicity is prerequisite for reliability.", "Edsger W. Dijkstra"),
    ("Code is poetry.", "Unknown"),
    ("Opportunities don't happen. You create them.", "Chris Grosser"),
    ("Great things are done by a series of small things brought together.", "Vincent van Gogh"),
    ("Happiness is not something ready made. It comes from your own actions.", "Dalai Lama"),
    ("Turn your wounds into wisdom.", "Oprah Winfrey"),
];

/// Returns the compiled-in quote list in its fixed order.
pub fn default_quotes() -> Vec<Quote> {
    DEFAULT_QUOTES
        .iter()
        .map(|(text, author)| Quote::new(*text, *author))
        .collect()
}
