pub mod genetics;
