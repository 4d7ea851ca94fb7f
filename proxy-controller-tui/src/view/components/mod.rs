pub mod helpbar;
