pub mod mob;
