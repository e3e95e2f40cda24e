use crate::processor::process_instruction;
use pinocchio::program_entrypoint;

// Entrypoint macro
program_entrypoint!(process_instruction);
