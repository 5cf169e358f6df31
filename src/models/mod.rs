pub mod answer;
pub mod classification;
pub mod form;
pub mod loaders;
pub mod question;

pub use answer::{AnswerSet, ClassifyRequest};
pub use classification::ClassificationResult;
pub use form::{ChoiceInput, InputRef, QuestionGroup, QuizForm};
pub use loaders::{load_quiz, load_quiz_file};
pub use question::{AnswerOption, Question, Quiz};
