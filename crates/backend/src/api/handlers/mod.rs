pub mod d100_commission;
