use crate::cpu::{Cpu, CpuResult};
use crate::memory_bus::MemoryBus;
use lazy_static::lazy_static;

/// One dispatch-table entry. `cycles` is the base T-cycle cost (the
/// not-taken cost for conditional branches); `execute` returns the extra
/// cycles on top of it. For the CB prefix entry the base is the prefix
/// fetch (4) and the extra comes from the CB table.
#[derive(Clone)]
pub struct Instruction {
    pub mnemonic: &'static str,
    pub length: u8,
    pub cycles: u8,
    pub execute: fn(&mut Cpu, &mut MemoryBus) -> CpuResult<u16>,
}

impl Instruction {
    pub const fn new(
        mnemonic: &'static str,
        length: u8,
        cycles: u8,
        execute: fn(&mut Cpu, &mut MemoryBus) -> CpuResult<u16>,
    ) -> Self {
        Instruction {
            mnemonic,
            length,
            cycles,
            execute,
        }
    }

    /// The eleven holes in the base grid. Exhaustiveness of the table means
    /// no opcode is ever silently dropped; these report a fatal error.
    pub const fn invalid() -> Self {
        Instruction {
            mnemonic: "INVALID",
            length: 1,
            cycles: 4,
            execute: Cpu::handle_invalid_opcode,
        }
    }
}

macro_rules! instr {
    ($mne:expr, $len:expr, $cyc:expr, $exec:expr) => {
        Instruction::new($mne, $len, $cyc, $exec)
    };
}
macro_rules! invalid {
    () => {
        Instruction::invalid()
    };
}

lazy_static! {
    /// The base opcode grid (0x00-0xFF).
    pub static ref INSTRUCTIONS: [Instruction; 256] = [
        // 0x00
        instr!("NOP", 1, 4, Cpu::op_nop),
        instr!("LD BC, d16", 3, 12, Cpu::op_ld_bc_d16),
        instr!("LD (BC), A", 1, 8, Cpu::op_ld_bcp_a),
        instr!("INC BC", 1, 8, Cpu::op_inc_bc),
        instr!("INC B", 1, 4, Cpu::op_inc_b),
        instr!("DEC B", 1, 4, Cpu::op_dec_b),
        instr!("LD B, d8", 2, 8, Cpu::op_ld_b_d8),
        instr!("RLCA", 1, 4, Cpu::op_rlca),
        instr!("LD (a16), SP", 3, 20, Cpu::op_ld_a16_sp),
        instr!("ADD HL, BC", 1, 8, Cpu::op_add_hl_bc),
        instr!("LD A, (BC)", 1, 8, Cpu::op_ld_a_bcp),
        instr!("DEC BC", 1, 8, Cpu::op_dec_bc),
        instr!("INC C", 1, 4, Cpu::op_inc_c),
        instr!("DEC C", 1, 4, Cpu::op_dec_c),
        instr!("LD C, d8", 2, 8, Cpu::op_ld_c_d8),
        instr!("RRCA", 1, 4, Cpu::op_rrca),
        // 0x10
        instr!("STOP", 2, 4, Cpu::op_stop),
        instr!("LD DE, d16", 3, 12, Cpu::op_ld_de_d16),
        instr!("LD (DE), A", 1, 8, Cpu::op_ld_dep_a),
        instr!("INC DE", 1, 8, Cpu::op_inc_de),
        instr!("INC D", 1, 4, Cpu::op_inc_d),
        instr!("DEC D", 1, 4, Cpu::op_dec_d),
        instr!("LD D, d8", 2, 8, Cpu::op_ld_d_d8),
        instr!("RLA", 1, 4, Cpu::op_rla),
        instr!("JR r8", 2, 12, Cpu::op_jr_r8),
        instr!("ADD HL, DE", 1, 8, Cpu::op_add_hl_de),
        instr!("LD A, (DE)", 1, 8, Cpu::op_ld_a_dep),
        instr!("DEC DE", 1, 8, Cpu::op_dec_de),
        instr!("INC E", 1, 4, Cpu::op_inc_e),
        instr!("DEC E", 1, 4, Cpu::op_dec_e),
        instr!("LD E, d8", 2, 8, Cpu::op_ld_e_d8),
        instr!("RRA", 1, 4, Cpu::op_rra),
        // 0x20
        instr!("JR NZ, r8", 2, 8, Cpu::op_jr_nz_r8),
        instr!("LD HL, d16", 3, 12, Cpu::op_ld_hl_d16),
        instr!("LD (HL+), A", 1, 8, Cpu::op_ld_hli_a),
        instr!("INC HL", 1, 8, Cpu::op_inc_hl),
        instr!("INC H", 1, 4, Cpu::op_inc_h),
        instr!("DEC H", 1, 4, Cpu::op_dec_h),
        instr!("LD H, d8", 2, 8, Cpu::op_ld_h_d8),
        instr!("DAA", 1, 4, Cpu::op_daa),
        instr!("JR Z, r8", 2, 8, Cpu::op_jr_z_r8),
        instr!("ADD HL, HL", 1, 8, Cpu::op_add_hl_hl),
        instr!("LD A, (HL+)", 1, 8, Cpu::op_ld_a_hli),
        instr!("DEC HL", 1, 8, Cpu::op_dec_hl),
        instr!("INC L", 1, 4, Cpu::op_inc_l),
        instr!("DEC L", 1, 4, Cpu::op_dec_l),
        instr!("LD L, d8", 2, 8, Cpu::op_ld_l_d8),
        instr!("CPL", 1, 4, Cpu::op_cpl),
        // 0x30
        instr!("JR NC, r8", 2, 8, Cpu::op_jr_nc_r8),
        instr!("LD SP, d16", 3, 12, Cpu::op_ld_sp_d16),
        instr!("LD (HL-), A", 1, 8, Cpu::op_ld_hld_a),
        instr!("INC SP", 1, 8, Cpu::op_inc_sp),
        instr!("INC (HL)", 1, 12, Cpu::op_inc_hlp),
        instr!("DEC (HL)", 1, 12, Cpu::op_dec_hlp),
        instr!("LD (HL), d8", 2, 12, Cpu::op_ld_hlp_d8),
        instr!("SCF", 1, 4, Cpu::op_scf),
        instr!("JR C, r8", 2, 8, Cpu::op_jr_c_r8),
        instr!("ADD HL, SP", 1, 8, Cpu::op_add_hl_sp),
        instr!("LD A, (HL-)", 1, 8, Cpu::op_ld_a_hld),
        instr!("DEC SP", 1, 8, Cpu::op_dec_sp),
        instr!("INC A", 1, 4, Cpu::op_inc_a),
        instr!("DEC A", 1, 4, Cpu::op_dec_a),
        instr!("LD A, d8", 2, 8, Cpu::op_ld_a_d8),
        instr!("CCF", 1, 4, Cpu::op_ccf),
        // 0x40
        instr!("LD B, B", 1, 4, Cpu::op_ld_b_b),
        instr!("LD B, C", 1, 4, Cpu::op_ld_b_c),
        instr!("LD B, D", 1, 4, Cpu::op_ld_b_d),
        instr!("LD B, E", 1, 4, Cpu::op_ld_b_e),
        instr!("LD B, H", 1, 4, Cpu::op_ld_b_h),
        instr!("LD B, L", 1, 4, Cpu::op_ld_b_l),
        instr!("LD B, (HL)", 1, 8, Cpu::op_ld_b_hlp),
        instr!("LD B, A", 1, 4, Cpu::op_ld_b_a),
        instr!("LD C, B", 1, 4, Cpu::op_ld_c_b),
        instr!("LD C, C", 1, 4, Cpu::op_ld_c_c),
        instr!("LD C, D", 1, 4, Cpu::op_ld_c_d),
        instr!("LD C, E", 1, 4, Cpu::op_ld_c_e),
        instr!("LD C, H", 1, 4, Cpu::op_ld_c_h),
        instr!("LD C, L", 1, 4, Cpu::op_ld_c_l),
        instr!("LD C, (HL)", 1, 8, Cpu::op_ld_c_hlp),
        instr!("LD C, A", 1, 4, Cpu::op_ld_c_a),
        // 0x50
        instr!("LD D, B", 1, 4, Cpu::op_ld_d_b),
        instr!("LD D, C", 1, 4, Cpu::op_ld_d_c),
        instr!("LD D, D", 1, 4, Cpu::op_ld_d_d),
        instr!("LD D, E", 1, 4, Cpu::op_ld_d_e),
        instr!("LD D, H", 1, 4, Cpu::op_ld_d_h),
        instr!("LD D, L", 1, 4, Cpu::op_ld_d_l),
        instr!("LD D, (HL)", 1, 8, Cpu::op_ld_d_hlp),
        instr!("LD D, A", 1, 4, Cpu::op_ld_d_a),
        instr!("LD E, B", 1, 4, Cpu::op_ld_e_b),
        instr!("LD E, C", 1, 4, Cpu::op_ld_e_c),
        instr!("LD E, D", 1, 4, Cpu::op_ld_e_d),
        instr!("LD E, E", 1, 4, Cpu::op_ld_e_e),
        instr!("LD E, H", 1, 4, Cpu::op_ld_e_h),
        instr!("LD E, L", 1, 4, Cpu::op_ld_e_l),
        instr!("LD E, (HL)", 1, 8, Cpu::op_ld_e_hlp),
        instr!("LD E, A", 1, 4, Cpu::op_ld_e_a),
        // 0x60
        instr!("LD H, B", 1, 4, Cpu::op_ld_h_b),
        instr!("LD H, C", 1, 4, Cpu::op_ld_h_c),
        instr!("LD H, D", 1, 4, Cpu::op_ld_h_d),
        instr!("LD H, E", 1, 4, Cpu::op_ld_h_e),
        instr!("LD H, H", 1, 4, Cpu::op_ld_h_h),
        instr!("LD H, L", 1, 4, Cpu::op_ld_h_l),
        instr!("LD H, (HL)", 1, 8, Cpu::op_ld_h_hlp),
        instr!("LD H, A", 1, 4, Cpu::op_ld_h_a),
        instr!("LD L, B", 1, 4, Cpu::op_ld_l_b),
        instr!("LD L, C", 1, 4, Cpu::op_ld_l_c),
        instr!("LD L, D", 1, 4, Cpu::op_ld_l_d),
        instr!("LD L, E", 1, 4, Cpu::op_ld_l_e),
        instr!("LD L, H", 1, 4, Cpu::op_ld_l_h),
        instr!("LD L, L", 1, 4, Cpu::op_ld_l_l),
        instr!("LD L, (HL)", 1, 8, Cpu::op_ld_l_hlp),
        instr!("LD L, A", 1, 4, Cpu::op_ld_l_a),
        // 0x70
        instr!("LD (HL), B", 1, 8, Cpu::op_ld_hlp_b),
        instr!("LD (HL), C", 1, 8, Cpu::op_ld_hlp_c),
        instr!("LD (HL), D", 1, 8, Cpu::op_ld_hlp_d),
        instr!("LD (HL), E", 1, 8, Cpu::op_ld_hlp_e),
        instr!("LD (HL), H", 1, 8, Cpu::op_ld_hlp_h),
        instr!("LD (HL), L", 1, 8, Cpu::op_ld_hlp_l),
        instr!("HALT", 1, 4, Cpu::op_halt),
        instr!("LD (HL), A", 1, 8, Cpu::op_ld_hlp_a),
        instr!("LD A, B", 1, 4, Cpu::op_ld_a_b),
        instr!("LD A, C", 1, 4, Cpu::op_ld_a_c),
        instr!("LD A, D", 1, 4, Cpu::op_ld_a_d),
        instr!("LD A, E", 1, 4, Cpu::op_ld_a_e),
        instr!("LD A, H", 1, 4, Cpu::op_ld_a_h),
        instr!("LD A, L", 1, 4, Cpu::op_ld_a_l),
        instr!("LD A, (HL)", 1, 8, Cpu::op_ld_a_hlp),
        instr!("LD A, A", 1, 4, Cpu::op_ld_a_a),
        // 0x80
        instr!("ADD A, B", 1, 4, Cpu::op_add_a_b),
        instr!("ADD A, C", 1, 4, Cpu::op_add_a_c),
        instr!("ADD A, D", 1, 4, Cpu::op_add_a_d),
        instr!("ADD A, E", 1, 4, Cpu::op_add_a_e),
        instr!("ADD A, H", 1, 4, Cpu::op_add_a_h),
        instr!("ADD A, L", 1, 4, Cpu::op_add_a_l),
        instr!("ADD A, (HL)", 1, 8, Cpu::op_add_a_hlp),
        instr!("ADD A, A", 1, 4, Cpu::op_add_a_a),
        instr!("ADC A, B", 1, 4, Cpu::op_adc_a_b),
        instr!("ADC A, C", 1, 4, Cpu::op_adc_a_c),
        instr!("ADC A, D", 1, 4, Cpu::op_adc_a_d),
        instr!("ADC A, E", 1, 4, Cpu::op_adc_a_e),
        instr!("ADC A, H", 1, 4, Cpu::op_adc_a_h),
        instr!("ADC A, L", 1, 4, Cpu::op_adc_a_l),
        instr!("ADC A, (HL)", 1, 8, Cpu::op_adc_a_hlp),
        instr!("ADC A, A", 1, 4, Cpu::op_adc_a_a),
        // 0x90
        instr!("SUB B", 1, 4, Cpu::op_sub_a_b),
        instr!("SUB C", 1, 4, Cpu::op_sub_a_c),
        instr!("SUB D", 1, 4, Cpu::op_sub_a_d),
        instr!("SUB E", 1, 4, Cpu::op_sub_a_e),
        instr!("SUB H", 1, 4, Cpu::op_sub_a_h),
        instr!("SUB L", 1, 4, Cpu::op_sub_a_l),
        instr!("SUB (HL)", 1, 8, Cpu::op_sub_a_hlp),
        instr!("SUB A", 1, 4, Cpu::op_sub_a_a),
        instr!("SBC A, B", 1, 4, Cpu::op_sbc_a_b),
        instr!("SBC A, C", 1, 4, Cpu::op_sbc_a_c),
        instr!("SBC A, D", 1, 4, Cpu::op_sbc_a_d),
        instr!("SBC A, E", 1, 4, Cpu::op_sbc_a_e),
        instr!("SBC A, H", 1, 4, Cpu::op_sbc_a_h),
        instr!("SBC A, L", 1, 4, Cpu::op_sbc_a_l),
        instr!("SBC A, (HL)", 1, 8, Cpu::op_sbc_a_hlp),
        instr!("SBC A, A", 1, 4, Cpu::op_sbc_a_a),
        // 0xA0
        instr!("AND B", 1, 4, Cpu::op_and_a_b),
        instr!("AND C", 1, 4, Cpu::op_and_a_c),
        instr!("AND D", 1, 4, Cpu::op_and_a_d),
        instr!("AND E", 1, 4, Cpu::op_and_a_e),
        instr!("AND H", 1, 4, Cpu::op_and_a_h),
        instr!("AND L", 1, 4, Cpu::op_and_a_l),
        instr!("AND (HL)", 1, 8, Cpu::op_and_a_hlp),
        instr!("AND A", 1, 4, Cpu::op_and_a_a),
        instr!("XOR B", 1, 4, Cpu::op_xor_a_b),
        instr!("XOR C", 1, 4, Cpu::op_xor_a_c),
        instr!("XOR D", 1, 4, Cpu::op_xor_a_d),
        instr!("XOR E", 1, 4, Cpu::op_xor_a_e),
        instr!("XOR H", 1, 4, Cpu::op_xor_a_h),
        instr!("XOR L", 1, 4, Cpu::op_xor_a_l),
        instr!("XOR (HL)", 1, 8, Cpu::op_xor_a_hlp),
        instr!("XOR A", 1, 4, Cpu::op_xor_a_a),
        // 0xB0
        instr!("OR B", 1, 4, Cpu::op_or_a_b),
        instr!("OR C", 1, 4, Cpu::op_or_a_c),
        instr!("OR D", 1, 4, Cpu::op_or_a_d),
        instr!("OR E", 1, 4, Cpu::op_or_a_e),
        instr!("OR H", 1, 4, Cpu::op_or_a_h),
        instr!("OR L", 1, 4, Cpu::op_or_a_l),
        instr!("OR (HL)", 1, 8, Cpu::op_or_a_hlp),
        instr!("OR A", 1, 4, Cpu::op_or_a_a),
        instr!("CP B", 1, 4, Cpu::op_cp_a_b),
        instr!("CP C", 1, 4, Cpu::op_cp_a_c),
        instr!("CP D", 1, 4, Cpu::op_cp_a_d),
        instr!("CP E", 1, 4, Cpu::op_cp_a_e),
        instr!("CP H", 1, 4, Cpu::op_cp_a_h),
        instr!("CP L", 1, 4, Cpu::op_cp_a_l),
        instr!("CP (HL)", 1, 8, Cpu::op_cp_a_hlp),
        instr!("CP A", 1, 4, Cpu::op_cp_a_a),
        // 0xC0
        instr!("RET NZ", 1, 8, Cpu::op_ret_nz),
        instr!("POP BC", 1, 12, Cpu::op_pop_bc),
        instr!("JP NZ, a16", 3, 12, Cpu::op_jp_nz_a16),
        instr!("JP a16", 3, 16, Cpu::op_jp_a16),
        instr!("CALL NZ, a16", 3, 12, Cpu::op_call_nz_a16),
        instr!("PUSH BC", 1, 16, Cpu::op_push_bc),
        instr!("ADD A, d8", 2, 8, Cpu::op_add_a_d8),
        instr!("RST 00H", 1, 16, Cpu::op_rst_00h),
        instr!("RET Z", 1, 8, Cpu::op_ret_z),
        instr!("RET", 1, 16, Cpu::op_ret),
        instr!("JP Z, a16", 3, 12, Cpu::op_jp_z_a16),
        instr!("PREFIX CB", 2, 4, Cpu::op_prefix_cb),
        instr!("CALL Z, a16", 3, 12, Cpu::op_call_z_a16),
        instr!("CALL a16", 3, 24, Cpu::op_call_a16),
        instr!("ADC A, d8", 2, 8, Cpu::op_adc_a_d8),
        instr!("RST 08H", 1, 16, Cpu::op_rst_08h),
        // 0xD0
        instr!("RET NC", 1, 8, Cpu::op_ret_nc),
        instr!("POP DE", 1, 12, Cpu::op_pop_de),
        instr!("JP NC, a16", 3, 12, Cpu::op_jp_nc_a16),
        invalid!(), // 0xD3
        instr!("CALL NC, a16", 3, 12, Cpu::op_call_nc_a16),
        instr!("PUSH DE", 1, 16, Cpu::op_push_de),
        instr!("SUB d8", 2, 8, Cpu::op_sub_a_d8),
        instr!("RST 10H", 1, 16, Cpu::op_rst_10h),
        instr!("RET C", 1, 8, Cpu::op_ret_c),
        instr!("RETI", 1, 16, Cpu::op_reti),
        instr!("JP C, a16", 3, 12, Cpu::op_jp_c_a16),
        invalid!(), // 0xDB
        instr!("CALL C, a16", 3, 12, Cpu::op_call_c_a16),
        invalid!(), // 0xDD
        instr!("SBC A, d8", 2, 8, Cpu::op_sbc_a_d8),
        instr!("RST 18H", 1, 16, Cpu::op_rst_18h),
        // 0xE0
        instr!("LDH (a8), A", 2, 12, Cpu::op_ldh_a8_a),
        instr!("POP HL", 1, 12, Cpu::op_pop_hl),
        instr!("LD (C), A", 1, 8, Cpu::op_ld_cp_a),
        invalid!(), // 0xE3
        invalid!(), // 0xE4
        instr!("PUSH HL", 1, 16, Cpu::op_push_hl),
        instr!("AND d8", 2, 8, Cpu::op_and_a_d8),
        instr!("RST 20H", 1, 16, Cpu::op_rst_20h),
        instr!("ADD SP, r8", 2, 16, Cpu::op_add_sp_e8),
        instr!("JP HL", 1, 4, Cpu::op_jp_hl),
        instr!("LD (a16), A", 3, 16, Cpu::op_ld_a16_a),
        invalid!(), // 0xEB
        invalid!(), // 0xEC
        invalid!(), // 0xED
        instr!("XOR d8", 2, 8, Cpu::op_xor_a_d8),
        instr!("RST 28H", 1, 16, Cpu::op_rst_28h),
        // 0xF0
        instr!("LDH A, (a8)", 2, 12, Cpu::op_ldh_a_a8),
        instr!("POP AF", 1, 12, Cpu::op_pop_af),
        instr!("LD A, (C)", 1, 8, Cpu::op_ld_a_cp),
        instr!("DI", 1, 4, Cpu::op_di),
        invalid!(), // 0xF4
        instr!("PUSH AF", 1, 16, Cpu::op_push_af),
        instr!("OR d8", 2, 8, Cpu::op_or_a_d8),
        instr!("RST 30H", 1, 16, Cpu::op_rst_30h),
        instr!("LD HL, SP+r8", 2, 12, Cpu::op_ld_hl_sp_e8),
        instr!("LD SP, HL", 1, 8, Cpu::op_ld_sp_hl),
        instr!("LD A, (a16)", 3, 16, Cpu::op_ld_a_a16),
        instr!("EI", 1, 4, Cpu::op_ei),
        invalid!(), // 0xFC
        invalid!(), // 0xFD
        instr!("CP d8", 2, 8, Cpu::op_cp_a_d8),
        instr!("RST 38H", 1, 16, Cpu::op_rst_38h),
    ];

    /// The CB-prefixed grid. `cycles` here is the cost *beyond* the prefix
    /// entry's base 4: register forms 4 (8 total), (HL) read-modify-write
    /// 12 (16 total), BIT (HL) 8 (12 total).
    pub static ref CB_INSTRUCTIONS: [Instruction; 256] = [
        // 0x00 RLC
        instr!("RLC B", 2, 4, Cpu::op_cb_rlc_b),
        instr!("RLC C", 2, 4, Cpu::op_cb_rlc_c),
        instr!("RLC D", 2, 4, Cpu::op_cb_rlc_d),
        instr!("RLC E", 2, 4, Cpu::op_cb_rlc_e),
        instr!("RLC H", 2, 4, Cpu::op_cb_rlc_h),
        instr!("RLC L", 2, 4, Cpu::op_cb_rlc_l),
        instr!("RLC (HL)", 2, 12, Cpu::op_cb_rlc_hlp),
        instr!("RLC A", 2, 4, Cpu::op_cb_rlc_a),
        // 0x08 RRC
        instr!("RRC B", 2, 4, Cpu::op_cb_rrc_b),
        instr!("RRC C", 2, 4, Cpu::op_cb_rrc_c),
        instr!("RRC D", 2, 4, Cpu::op_cb_rrc_d),
        instr!("RRC E", 2, 4, Cpu::op_cb_rrc_e),
        instr!("RRC H", 2, 4, Cpu::op_cb_rrc_h),
        instr!("RRC L", 2, 4, Cpu::op_cb_rrc_l),
        instr!("RRC (HL)", 2, 12, Cpu::op_cb_rrc_hlp),
        instr!("RRC A", 2, 4, Cpu::op_cb_rrc_a),
        // 0x10 RL
        instr!("RL B", 2, 4, Cpu::op_cb_rl_b),
        instr!("RL C", 2, 4, Cpu::op_cb_rl_c),
        instr!("RL D", 2, 4, Cpu::op_cb_rl_d),
        instr!("RL E", 2, 4, Cpu::op_cb_rl_e),
        instr!("RL H", 2, 4, Cpu::op_cb_rl_h),
        instr!("RL L", 2, 4, Cpu::op_cb_rl_l),
        instr!("RL (HL)", 2, 12, Cpu::op_cb_rl_hlp),
        instr!("RL A", 2, 4, Cpu::op_cb_rl_a),
        // 0x18 RR
        instr!("RR B", 2, 4, Cpu::op_cb_rr_b),
        instr!("RR C", 2, 4, Cpu::op_cb_rr_c),
        instr!("RR D", 2, 4, Cpu::op_cb_rr_d),
        instr!("RR E", 2, 4, Cpu::op_cb_rr_e),
        instr!("RR H", 2, 4, Cpu::op_cb_rr_h),
        instr!("RR L", 2, 4, Cpu::op_cb_rr_l),
        instr!("RR (HL)", 2, 12, Cpu::op_cb_rr_hlp),
        instr!("RR A", 2, 4, Cpu::op_cb_rr_a),
        // 0x20 SLA
        instr!("SLA B", 2, 4, Cpu::op_cb_sla_b),
        instr!("SLA C", 2, 4, Cpu::op_cb_sla_c),
        instr!("SLA D", 2, 4, Cpu::op_cb_sla_d),
        instr!("SLA E", 2, 4, Cpu::op_cb_sla_e),
        instr!("SLA H", 2, 4, Cpu::op_cb_sla_h),
        instr!("SLA L", 2, 4, Cpu::op_cb_sla_l),
        instr!("SLA (HL)", 2, 12, Cpu::op_cb_sla_hlp),
        instr!("SLA A", 2, 4, Cpu::op_cb_sla_a),
        // 0x28 SRA
        instr!("SRA B", 2, 4, Cpu::op_cb_sra_b),
        instr!("SRA C", 2, 4, Cpu::op_cb_sra_c),
        instr!("SRA D", 2, 4, Cpu::op_cb_sra_d),
        instr!("SRA E", 2, 4, Cpu::op_cb_sra_e),
        instr!("SRA H", 2, 4, Cpu::op_cb_sra_h),
        instr!("SRA L", 2, 4, Cpu::op_cb_sra_l),
        instr!("SRA (HL)", 2, 12, Cpu::op_cb_sra_hlp),
        instr!("SRA A", 2, 4, Cpu::op_cb_sra_a),
        // 0x30 SWAP
        instr!("SWAP B", 2, 4, Cpu::op_cb_swap_b),
        instr!("SWAP C", 2, 4, Cpu::op_cb_swap_c),
        instr!("SWAP D", 2, 4, Cpu::op_cb_swap_d),
        instr!("SWAP E", 2, 4, Cpu::op_cb_swap_e),
        instr!("SWAP H", 2, 4, Cpu::op_cb_swap_h),
        instr!("SWAP L", 2, 4, Cpu::op_cb_swap_l),
        instr!("SWAP (HL)", 2, 12, Cpu::op_cb_swap_hlp),
        instr!("SWAP A", 2, 4, Cpu::op_cb_swap_a),
        // 0x38 SRL
        instr!("SRL B", 2, 4, Cpu::op_cb_srl_b),
        instr!("SRL C", 2, 4, Cpu::op_cb_srl_c),
        instr!("SRL D", 2, 4, Cpu::op_cb_srl_d),
        instr!("SRL E", 2, 4, Cpu::op_cb_srl_e),
        instr!("SRL H", 2, 4, Cpu::op_cb_srl_h),
        instr!("SRL L", 2, 4, Cpu::op_cb_srl_l),
        instr!("SRL (HL)", 2, 12, Cpu::op_cb_srl_hlp),
        instr!("SRL A", 2, 4, Cpu::op_cb_srl_a),
        // 0x40 BIT 0
        instr!("BIT 0, B", 2, 4, Cpu::op_cb_bit_0_b),
        instr!("BIT 0, C", 2, 4, Cpu::op_cb_bit_0_c),
        instr!("BIT 0, D", 2, 4, Cpu::op_cb_bit_0_d),
        instr!("BIT 0, E", 2, 4, Cpu::op_cb_bit_0_e),
        instr!("BIT 0, H", 2, 4, Cpu::op_cb_bit_0_h),
        instr!("BIT 0, L", 2, 4, Cpu::op_cb_bit_0_l),
        instr!("BIT 0, (HL)", 2, 8, Cpu::op_cb_bit_0_hlp),
        instr!("BIT 0, A", 2, 4, Cpu::op_cb_bit_0_a),
        // 0x48 BIT 1
        instr!("BIT 1, B", 2, 4, Cpu::op_cb_bit_1_b),
        instr!("BIT 1, C", 2, 4, Cpu::op_cb_bit_1_c),
        instr!("BIT 1, D", 2, 4, Cpu::op_cb_bit_1_d),
        instr!("BIT 1, E", 2, 4, Cpu::op_cb_bit_1_e),
        instr!("BIT 1, H", 2, 4, Cpu::op_cb_bit_1_h),
        instr!("BIT 1, L", 2, 4, Cpu::op_cb_bit_1_l),
        instr!("BIT 1, (HL)", 2, 8, Cpu::op_cb_bit_1_hlp),
        instr!("BIT 1, A", 2, 4, Cpu::op_cb_bit_1_a),
        // 0x50 BIT 2
        instr!("BIT 2, B", 2, 4, Cpu::op_cb_bit_2_b),
        instr!("BIT 2, C", 2, 4, Cpu::op_cb_bit_2_c),
        instr!("BIT 2, D", 2, 4, Cpu::op_cb_bit_2_d),
        instr!("BIT 2, E", 2, 4, Cpu::op_cb_bit_2_e),
        instr!("BIT 2, H", 2, 4, Cpu::op_cb_bit_2_h),
        instr!("BIT 2, L", 2, 4, Cpu::op_cb_bit_2_l),
        instr!("BIT 2, (HL)", 2, 8, Cpu::op_cb_bit_2_hlp),
        instr!("BIT 2, A", 2, 4, Cpu::op_cb_bit_2_a),
        // 0x58 BIT 3
        instr!("BIT 3, B", 2, 4, Cpu::op_cb_bit_3_b),
        instr!("BIT 3, C", 2, 4, Cpu::op_cb_bit_3_c),
        instr!("BIT 3, D", 2, 4, Cpu::op_cb_bit_3_d),
        instr!("BIT 3, E", 2, 4, Cpu::op_cb_bit_3_e),
        instr!("BIT 3, H", 2, 4, Cpu::op_cb_bit_3_h),
        instr!("BIT 3, L", 2, 4, Cpu::op_cb_bit_3_l),
        instr!("BIT 3, (HL)", 2, 8, Cpu::op_cb_bit_3_hlp),
        instr!("BIT 3, A", 2, 4, Cpu::op_cb_bit_3_a),
        // 0x60 BIT 4
        instr!("BIT 4, B", 2, 4, Cpu::op_cb_bit_4_b),
        instr!("BIT 4, C", 2, 4, Cpu::op_cb_bit_4_c),
        instr!("BIT 4, D", 2, 4, Cpu::op_cb_bit_4_d),
        instr!("BIT 4, E", 2, 4, Cpu::op_cb_bit_4_e),
        instr!("BIT 4, H", 2, 4, Cpu::op_cb_bit_4_h),
        instr!("BIT 4, L", 2, 4, Cpu::op_cb_bit_4_l),
        instr!("BIT 4, (HL)", 2, 8, Cpu::op_cb_bit_4_hlp),
        instr!("BIT 4, A", 2, 4, Cpu::op_cb_bit_4_a),
        // 0x68 BIT 5
        instr!("BIT 5, B", 2, 4, Cpu::op_cb_bit_5_b),
        instr!("BIT 5, C", 2, 4, Cpu::op_cb_bit_5_c),
        instr!("BIT 5, D", 2, 4, Cpu::op_cb_bit_5_d),
        instr!("BIT 5, E", 2, 4, Cpu::op_cb_bit_5_e),
        instr!("BIT 5, H", 2, 4, Cpu::op_cb_bit_5_h),
        instr!("BIT 5, L", 2, 4, Cpu::op_cb_bit_5_l),
        instr!("BIT 5, (HL)", 2, 8, Cpu::op_cb_bit_5_hlp),
        instr!("BIT 5, A", 2, 4, Cpu::op_cb_bit_5_a),
        // 0x70 BIT 6
        instr!("BIT 6, B", 2, 4, Cpu::op_cb_bit_6_b),
        instr!("BIT 6, C", 2, 4, Cpu::op_cb_bit_6_c),
        instr!("BIT 6, D", 2, 4, Cpu::op_cb_bit_6_d),
        instr!("BIT 6, E", 2, 4, Cpu::op_cb_bit_6_e),
        instr!("BIT 6, H", 2, 4, Cpu::op_cb_bit_6_h),
        instr!("BIT 6, L", 2, 4, Cpu::op_cb_bit_6_l),
        instr!("BIT 6, (HL)", 2, 8, Cpu::op_cb_bit_6_hlp),
        instr!("BIT 6, A", 2, 4, Cpu::op_cb_bit_6_a),
        // 0x78 BIT 7
        instr!("BIT 7, B", 2, 4, Cpu::op_cb_bit_7_b),
        instr!("BIT 7, C", 2, 4, Cpu::op_cb_bit_7_c),
        instr!("BIT 7, D", 2, 4, Cpu::op_cb_bit_7_d),
        instr!("BIT 7, E", 2, 4, Cpu::op_cb_bit_7_e),
        instr!("BIT 7, H", 2, 4, Cpu::op_cb_bit_7_h),
        instr!("BIT 7, L", 2, 4, Cpu::op_cb_bit_7_l),
        instr!("BIT 7, (HL)", 2, 8, Cpu::op_cb_bit_7_hlp),
        instr!("BIT 7, A", 2, 4, Cpu::op_cb_bit_7_a),
        // 0x80 RES 0
        instr!("RES 0, B", 2, 4, Cpu::op_cb_res_0_b),
        instr!("RES 0, C", 2, 4, Cpu::op_cb_res_0_c),
        instr!("RES 0, D", 2, 4, Cpu::op_cb_res_0_d),
        instr!("RES 0, E", 2, 4, Cpu::op_cb_res_0_e),
        instr!("RES 0, H", 2, 4, Cpu::op_cb_res_0_h),
        instr!("RES 0, L", 2, 4, Cpu::op_cb_res_0_l),
        instr!("RES 0, (HL)", 2, 12, Cpu::op_cb_res_0_hlp),
        instr!("RES 0, A", 2, 4, Cpu::op_cb_res_0_a),
        // 0x88 RES 1
        instr!("RES 1, B", 2, 4, Cpu::op_cb_res_1_b),
        instr!("RES 1, C", 2, 4, Cpu::op_cb_res_1_c),
        instr!("RES 1, D", 2, 4, Cpu::op_cb_res_1_d),
        instr!("RES 1, E", 2, 4, Cpu::op_cb_res_1_e),
        instr!("RES 1, H", 2, 4, Cpu::op_cb_res_1_h),
        instr!("RES 1, L", 2, 4, Cpu::op_cb_res_1_l),
        instr!("RES 1, (HL)", 2, 12, Cpu::op_cb_res_1_hlp),
        instr!("RES 1, A", 2, 4, Cpu::op_cb_res_1_a),
        // 0x90 RES 2
        instr!("RES 2, B", 2, 4, Cpu::op_cb_res_2_b),
        instr!("RES 2, C", 2, 4, Cpu::op_cb_res_2_c),
        instr!("RES 2, D", 2, 4, Cpu::op_cb_res_2_d),
        instr!("RES 2, E", 2, 4, Cpu::op_cb_res_2_e),
        instr!("RES 2, H", 2, 4, Cpu::op_cb_res_2_h),
        instr!("RES 2, L", 2, 4, Cpu::op_cb_res_2_l),
        instr!("RES 2, (HL)", 2, 12, Cpu::op_cb_res_2_hlp),
        instr!("RES 2, A", 2, 4, Cpu::op_cb_res_2_a),
        // 0x98 RES 3
        instr!("RES 3, B", 2, 4, Cpu::op_cb_res_3_b),
        instr!("RES 3, C", 2, 4, Cpu::op_cb_res_3_c),
        instr!("RES 3, D", 2, 4, Cpu::op_cb_res_3_d),
        instr!("RES 3, E", 2, 4, Cpu::op_cb_res_3_e),
        instr!("RES 3, H", 2, 4, Cpu::op_cb_res_3_h),
        instr!("RES 3, L", 2, 4, Cpu::op_cb_res_3_l),
        instr!("RES 3, (HL)", 2, 12, Cpu::op_cb_res_3_hlp),
        instr!("RES 3, A", 2, 4, Cpu::op_cb_res_3_a),
        // 0xA0 RES 4
        instr!("RES 4, B", 2, 4, Cpu::op_cb_res_4_b),
        instr!("RES 4, C", 2, 4, Cpu::op_cb_res_4_c),
        instr!("RES 4, D", 2, 4, Cpu::op_cb_res_4_d),
        instr!("RES 4, E", 2, 4, Cpu::op_cb_res_4_e),
        instr!("RES 4, H", 2, 4, Cpu::op_cb_res_4_h),
        instr!("RES 4, L", 2, 4, Cpu::op_cb_res_4_l),
        instr!("RES 4, (HL)", 2, 12, Cpu::op_cb_res_4_hlp),
        instr!("RES 4, A", 2, 4, Cpu::op_cb_res_4_a),
        // 0xA8 RES 5
        instr!("RES 5, B", 2, 4, Cpu::op_cb_res_5_b),
        instr!("RES 5, C", 2, 4, Cpu::op_cb_res_5_c),
        instr!("RES 5, D", 2, 4, Cpu::op_cb_res_5_d),
        instr!("RES 5, E", 2, 4, Cpu::op_cb_res_5_e),
        instr!("RES 5, H", 2, 4, Cpu::op_cb_res_5_h),
        instr!("RES 5, L", 2, 4, Cpu::op_cb_res_5_l),
        instr!("RES 5, (HL)", 2, 12, Cpu::op_cb_res_5_hlp),
        instr!("RES 5, A", 2, 4, Cpu::op_cb_res_5_a),
        // 0xB0 RES 6
        instr!("RES 6, B", 2, 4, Cpu::op_cb_res_6_b),
        instr!("RES 6, C", 2, 4, Cpu::op_cb_res_6_c),
        instr!("RES 6, D", 2, 4, Cpu::op_cb_res_6_d),
        instr!("RES 6, E", 2, 4, Cpu::op_cb_res_6_e),
        instr!("RES 6, H", 2, 4, Cpu::op_cb_res_6_h),
        instr!("RES 6, L", 2, 4, Cpu::op_cb_res_6_l),
        instr!("RES 6, (HL)", 2, 12, Cpu::op_cb_res_6_hlp),
        instr!("RES 6, A", 2, 4, Cpu::op_cb_res_6_a),
        // 0xB8 RES 7
        instr!("RES 7, B", 2, 4, Cpu::op_cb_res_7_b),
        instr!("RES 7, C", 2, 4, Cpu::op_cb_res_7_c),
        instr!("RES 7, D", 2, 4, Cpu::op_cb_res_7_d),
        instr!("RES 7, E", 2, 4, Cpu::op_cb_res_7_e),
        instr!("RES 7, H", 2, 4, Cpu::op_cb_res_7_h),
        instr!("RES 7, L", 2, 4, Cpu::op_cb_res_7_l),
        instr!("RES 7, (HL)", 2, 12, Cpu::op_cb_res_7_hlp),
        instr!("RES 7, A", 2, 4, Cpu::op_cb_res_7_a),
        // 0xC0 SET 0
        instr!("SET 0, B", 2, 4, Cpu::op_cb_set_0_b),
        instr!("SET 0, C", 2, 4, Cpu::op_cb_set_0_c),
        instr!("SET 0, D", 2, 4, Cpu::op_cb_set_0_d),
        instr!("SET 0, E", 2, 4, Cpu::op_cb_set_0_e),
        instr!("SET 0, H", 2, 4, Cpu::op_cb_set_0_h),
        instr!("SET 0, L", 2, 4, Cpu::op_cb_set_0_l),
        instr!("SET 0, (HL)", 2, 12, Cpu::op_cb_set_0_hlp),
        instr!("SET 0, A", 2, 4, Cpu::op_cb_set_0_a),
        // 0xC8 SET 1
        instr!("SET 1, B", 2, 4, Cpu::op_cb_set_1_b),
        instr!("SET 1, C", 2, 4, Cpu::op_cb_set_1_c),
        instr!("SET 1, D", 2, 4, Cpu::op_cb_set_1_d),
        instr!("SET 1, E", 2, 4, Cpu::op_cb_set_1_e),
        instr!("SET 1, H", 2, 4, Cpu::op_cb_set_1_h),
        instr!("SET 1, L", 2, 4, Cpu::op_cb_set_1_l),
        instr!("SET 1, (HL)", 2, 12, Cpu::op_cb_set_1_hlp),
        instr!("SET 1, A", 2, 4, Cpu::op_cb_set_1_a),
        // 0xD0 SET 2
        instr!("SET 2, B", 2, 4, Cpu::op_cb_set_2_b),
        instr!("SET 2, C", 2, 4, Cpu::op_cb_set_2_c),
        instr!("SET 2, D", 2, 4, Cpu::op_cb_set_2_d),
        instr!("SET 2, E", 2, 4, Cpu::op_cb_set_2_e),
        instr!("SET 2, H", 2, 4, Cpu::op_cb_set_2_h),
        instr!("SET 2, L", 2, 4, Cpu::op_cb_set_2_l),
        instr!("SET 2, (HL)", 2, 12, Cpu::op_cb_set_2_hlp),
        instr!("SET 2, A", 2, 4, Cpu::op_cb_set_2_a),
        // 0xD8 SET 3
        instr!("SET 3, B", 2, 4, Cpu::op_cb_set_3_b),
        instr!("SET 3, C", 2, 4, Cpu::op_cb_set_3_c),
        instr!("SET 3, D", 2, 4, Cpu::op_cb_set_3_d),
        instr!("SET 3, E", 2, 4, Cpu::op_cb_set_3_e),
        instr!("SET 3, H", 2, 4, Cpu::op_cb_set_3_h),
        instr!("SET 3, L", 2, 4, Cpu::op_cb_set_3_l),
        instr!("SET 3, (HL)", 2, 12, Cpu::op_cb_set_3_hlp),
        instr!("SET 3, A", 2, 4, Cpu::op_cb_set_3_a),
        // 0xE0 SET 4
        instr!("SET 4, B", 2, 4, Cpu::op_cb_set_4_b),
        instr!("SET 4, C", 2, 4, Cpu::op_cb_set_4_c),
        instr!("SET 4, D", 2, 4, Cpu::op_cb_set_4_d),
        instr!("SET 4, E", 2, 4, Cpu::op_cb_set_4_e),
        instr!("SET 4, H", 2, 4, Cpu::op_cb_set_4_h),
        instr!("SET 4, L", 2, 4, Cpu::op_cb_set_4_l),
        instr!("SET 4, (HL)", 2, 12, Cpu::op_cb_set_4_hlp),
        instr!("SET 4, A", 2, 4, Cpu::op_cb_set_4_a),
        // 0xE8 SET 5
        instr!("SET 5, B", 2, 4, Cpu::op_cb_set_5_b),
        instr!("SET 5, C", 2, 4, Cpu::op_cb_set_5_c),
        instr!("SET 5, D", 2, 4, Cpu::op_cb_set_5_d),
        instr!("SET 5, E", 2, 4, Cpu::op_cb_set_5_e),
        instr!("SET 5, H", 2, 4, Cpu::op_cb_set_5_h),
        instr!("SET 5, L", 2, 4, Cpu::op_cb_set_5_l),
        instr!("SET 5, (HL)", 2, 12, Cpu::op_cb_set_5_hlp),
        instr!("SET 5, A", 2, 4, Cpu::op_cb_set_5_a),
        // 0xF0 SET 6
        instr!("SET 6, B", 2, 4, Cpu::op_cb_set_6_b),
        instr!("SET 6, C", 2, 4, Cpu::op_cb_set_6_c),
        instr!("SET 6, D", 2, 4, Cpu::op_cb_set_6_d),
        instr!("SET 6, E", 2, 4, Cpu::op_cb_set_6_e),
        instr!("SET 6, H", 2, 4, Cpu::op_cb_set_6_h),
        instr!("SET 6, L", 2, 4, Cpu::op_cb_set_6_l),
        instr!("SET 6, (HL)", 2, 12, Cpu::op_cb_set_6_hlp),
        instr!("SET 6, A", 2, 4, Cpu::op_cb_set_6_a),
        // 0xF8 SET 7
        instr!("SET 7, B", 2, 4, Cpu::op_cb_set_7_b),
        instr!("SET 7, C", 2, 4, Cpu::op_cb_set_7_c),
        instr!("SET 7, D", 2, 4, Cpu::op_cb_set_7_d),
        instr!("SET 7, E", 2, 4, Cpu::op_cb_set_7_e),
        instr!("SET 7, H", 2, 4, Cpu::op_cb_set_7_h),
        instr!("SET 7, L", 2, 4, Cpu::op_cb_set_7_l),
        instr!("SET 7, (HL)", 2, 12, Cpu::op_cb_set_7_hlp),
        instr!("SET 7, A", 2, 4, Cpu::op_cb_set_7_a),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_table_lengths_and_cycles_are_sane() {
        for (opcode, instr) in INSTRUCTIONS.iter().enumerate() {
            assert!(
                (1..=3).contains(&instr.length),
                "opcode {opcode:#04X} has length {}",
                instr.length
            );
            assert_eq!(
                instr.cycles % 4,
                0,
                "opcode {opcode:#04X} base cycles {} not a multiple of 4",
                instr.cycles
            );
        }
    }

    #[test]
    fn the_eleven_illegal_opcodes_and_no_others_are_invalid() {
        let illegal = [
            0xD3u8, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
        ];
        for opcode in 0..=255u8 {
            let is_invalid = INSTRUCTIONS[opcode as usize].mnemonic == "INVALID";
            assert_eq!(
                is_invalid,
                illegal.contains(&opcode),
                "opcode {opcode:#04X}"
            );
        }
    }

    #[test]
    fn cb_table_is_fully_populated() {
        for (opcode, instr) in CB_INSTRUCTIONS.iter().enumerate() {
            assert_ne!(instr.mnemonic, "INVALID", "CB opcode {opcode:#04X}");
            assert_eq!(instr.length, 2);
            assert!(matches!(instr.cycles, 4 | 8 | 12));
        }
    }
}
