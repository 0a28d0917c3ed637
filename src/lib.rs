pub mod icon_gen;
