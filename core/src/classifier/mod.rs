pub mod artifacts;
pub mod interface;
pub mod logistic;
pub mod tfidf;

pub use artifacts::{load_artifacts, ArtifactPair, ArtifactSnapshot};
pub use interface::{BinaryModel, ClassifierVerdict, PostingClassifier, SparseVector, TextVectorizer};
