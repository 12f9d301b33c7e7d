pub mod tukorea;
