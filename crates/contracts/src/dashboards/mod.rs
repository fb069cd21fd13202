pub mod d400_bd_ranking;
