//! Arabic joining types and presentation forms.
//!
//! Generated by `tools/ucd-gen` from UnicodeData.txt and ArabicShaping.txt
//! (Unicode 14.0.0). Do not edit by hand.

use crate::types::JoiningType;

/// `(code point, [isolated, final, initial, medial])`; 0 means no such form.
pub(crate) static ARABIC_SHAPES: [(u32, [u32; 4]); 76] = [
    (0x0621, [0xFE80, 0, 0, 0]),
    (0x0622, [0xFE81, 0xFE82, 0, 0]),
    (0x0623, [0xFE83, 0xFE84, 0, 0]),
    (0x0624, [0xFE85, 0xFE86, 0, 0]),
    (0x0625, [0xFE87, 0xFE88, 0, 0]),
    (0x0626, [0xFE89, 0xFE8A, 0xFE8B, 0xFE8C]),
    (0x0627, [0xFE8D, 0xFE8E, 0, 0]),
    (0x0628, [0xFE8F, 0xFE90, 0xFE91, 0xFE92]),
    (0x0629, [0xFE93, 0xFE94, 0, 0]),
    (0x062A, [0xFE95, 0xFE96, 0xFE97, 0xFE98]),
    (0x062B, [0xFE99, 0xFE9A, 0xFE9B, 0xFE9C]),
    (0x062C, [0xFE9D, 0xFE9E, 0xFE9F, 0xFEA0]),
    (0x062D, [0xFEA1, 0xFEA2, 0xFEA3, 0xFEA4]),
    (0x062E, [0xFEA5, 0xFEA6, 0xFEA7, 0xFEA8]),
    (0x062F, [0xFEA9, 0xFEAA, 0, 0]),
    (0x0630, [0xFEAB, 0xFEAC, 0, 0]),
    (0x0631, [0xFEAD, 0xFEAE, 0, 0]),
    (0x0632, [0xFEAF, 0xFEB0, 0, 0]),
    (0x0633, [0xFEB1, 0xFEB2, 0xFEB3, 0xFEB4]),
    (0x0634, [0xFEB5, 0xFEB6, 0xFEB7, 0xFEB8]),
    (0x0635, [0xFEB9, 0xFEBA, 0xFEBB, 0xFEBC]),
    (0x0636, [0xFEBD, 0xFEBE, 0xFEBF, 0xFEC0]),
    (0x0637, [0xFEC1, 0xFEC2, 0xFEC3, 0xFEC4]),
    (0x0638, [0xFEC5, 0xFEC6, 0xFEC7, 0xFEC8]),
    (0x0639, [0xFEC9, 0xFECA, 0xFECB, 0xFECC]),
    (0x063A, [0xFECD, 0xFECE, 0xFECF, 0xFED0]),
    (0x0641, [0xFED1, 0xFED2, 0xFED3, 0xFED4]),
    (0x0642, [0xFED5, 0xFED6, 0xFED7, 0xFED8]),
    (0x0643, [0xFED9, 0xFEDA, 0xFEDB, 0xFEDC]),
    (0x0644, [0xFEDD, 0xFEDE, 0xFEDF, 0xFEE0]),
    (0x0645, [0xFEE1, 0xFEE2, 0xFEE3, 0xFEE4]),
    (0x0646, [0xFEE5, 0xFEE6, 0xFEE7, 0xFEE8]),
    (0x0647, [0xFEE9, 0xFEEA, 0xFEEB, 0xFEEC]),
    (0x0648, [0xFEED, 0xFEEE, 0, 0]),
    (0x0649, [0xFEEF, 0xFEF0, 0xFBE8, 0xFBE9]),
    (0x064A, [0xFEF1, 0xFEF2, 0xFEF3, 0xFEF4]),
    (0x0671, [0xFB50, 0xFB51, 0, 0]),
    (0x0677, [0xFBDD, 0, 0, 0]),
    (0x0679, [0xFB66, 0xFB67, 0xFB68, 0xFB69]),
    (0x067A, [0xFB5E, 0xFB5F, 0xFB60, 0xFB61]),
    (0x067B, [0xFB52, 0xFB53, 0xFB54, 0xFB55]),
    (0x067E, [0xFB56, 0xFB57, 0xFB58, 0xFB59]),
    (0x067F, [0xFB62, 0xFB63, 0xFB64, 0xFB65]),
    (0x0680, [0xFB5A, 0xFB5B, 0xFB5C, 0xFB5D]),
    (0x0683, [0xFB76, 0xFB77, 0xFB78, 0xFB79]),
    (0x0684, [0xFB72, 0xFB73, 0xFB74, 0xFB75]),
    (0x0686, [0xFB7A, 0xFB7B, 0xFB7C, 0xFB7D]),
    (0x0687, [0xFB7E, 0xFB7F, 0xFB80, 0xFB81]),
    (0x0688, [0xFB88, 0xFB89, 0, 0]),
    (0x068C, [0xFB84, 0xFB85, 0, 0]),
    (0x068D, [0xFB82, 0xFB83, 0, 0]),
    (0x068E, [0xFB86, 0xFB87, 0, 0]),
    (0x0691, [0xFB8C, 0xFB8D, 0, 0]),
    (0x0698, [0xFB8A, 0xFB8B, 0, 0]),
    (0x06A4, [0xFB6A, 0xFB6B, 0xFB6C, 0xFB6D]),
    (0x06A6, [0xFB6E, 0xFB6F, 0xFB70, 0xFB71]),
    (0x06A9, [0xFB8E, 0xFB8F, 0xFB90, 0xFB91]),
    (0x06AD, [0xFBD3, 0xFBD4, 0xFBD5, 0xFBD6]),
    (0x06AF, [0xFB92, 0xFB93, 0xFB94, 0xFB95]),
    (0x06B1, [0xFB9A, 0xFB9B, 0xFB9C, 0xFB9D]),
    (0x06B3, [0xFB96, 0xFB97, 0xFB98, 0xFB99]),
    (0x06BA, [0xFB9E, 0xFB9F, 0, 0]),
    (0x06BB, [0xFBA0, 0xFBA1, 0xFBA2, 0xFBA3]),
    (0x06BE, [0xFBAA, 0xFBAB, 0xFBAC, 0xFBAD]),
    (0x06C0, [0xFBA4, 0xFBA5, 0, 0]),
    (0x06C1, [0xFBA6, 0xFBA7, 0xFBA8, 0xFBA9]),
    (0x06C5, [0xFBE0, 0xFBE1, 0, 0]),
    (0x06C6, [0xFBD9, 0xFBDA, 0, 0]),
    (0x06C7, [0xFBD7, 0xFBD8, 0, 0]),
    (0x06C8, [0xFBDB, 0xFBDC, 0, 0]),
    (0x06C9, [0xFBE2, 0xFBE3, 0, 0]),
    (0x06CB, [0xFBDE, 0xFBDF, 0, 0]),
    (0x06CC, [0xFBFC, 0xFBFD, 0xFBFE, 0xFBFF]),
    (0x06D0, [0xFBE4, 0xFBE5, 0xFBE6, 0xFBE7]),
    (0x06D2, [0xFBAE, 0xFBAF, 0, 0]),
    (0x06D3, [0xFBB0, 0xFBB1, 0, 0]),
];

/// `(first, last, joining type)`, sorted and non-overlapping. Code points
/// missing here are not listed in ArabicShaping.txt and are not of general
/// category Mn, Me or Cf.
pub(crate) static JOINING_RANGES: [(u32, u32, JoiningType); 506] = [
    (0x00AD, 0x00AD, JoiningType::T),
    (0x0300, 0x036F, JoiningType::T),
    (0x0483, 0x0489, JoiningType::T),
    (0x0591, 0x05BD, JoiningType::T),
    (0x05BF, 0x05BF, JoiningType::T),
    (0x05C1, 0x05C2, JoiningType::T),
    (0x05C4, 0x05C5, JoiningType::T),
    (0x05C7, 0x05C7, JoiningType::T),
    (0x0600, 0x0605, JoiningType::U),
    (0x0610, 0x061A, JoiningType::T),
    (0x061C, 0x061C, JoiningType::T),
    (0x0620, 0x0620, JoiningType::D),
    (0x0622, 0x0625, JoiningType::R),
    (0x0626, 0x0626, JoiningType::D),
    (0x0627, 0x0627, JoiningType::R),
    (0x0628, 0x0628, JoiningType::D),
    (0x0629, 0x0629, JoiningType::R),
    (0x062A, 0x062E, JoiningType::D),
    (0x062F, 0x0632, JoiningType::R),
    (0x0633, 0x063F, JoiningType::D),
    (0x0640, 0x0640, JoiningType::C),
    (0x0641, 0x0647, JoiningType::D),
    (0x0648, 0x0648, JoiningType::R),
    (0x0649, 0x064A, JoiningType::D),
    (0x064B, 0x065F, JoiningType::T),
    (0x066E, 0x066F, JoiningType::D),
    (0x0670, 0x0670, JoiningType::T),
    (0x0671, 0x0673, JoiningType::R),
    (0x0675, 0x0677, JoiningType::R),
    (0x0678, 0x0687, JoiningType::D),
    (0x0688, 0x0699, JoiningType::R),
    (0x069A, 0x06BF, JoiningType::D),
    (0x06C0, 0x06C0, JoiningType::R),
    (0x06C1, 0x06C2, JoiningType::D),
    (0x06C3, 0x06CB, JoiningType::R),
    (0x06CC, 0x06CC, JoiningType::D),
    (0x06CD, 0x06CD, JoiningType::R),
    (0x06CE, 0x06CE, JoiningType::D),
    (0x06CF, 0x06CF, JoiningType::R),
    (0x06D0, 0x06D1, JoiningType::D),
    (0x06D2, 0x06D3, JoiningType::R),
    (0x06D5, 0x06D5, JoiningType::R),
    (0x06D6, 0x06DC, JoiningType::T),
    (0x06DD, 0x06DD, JoiningType::U),
    (0x06DF, 0x06E4, JoiningType::T),
    (0x06E7, 0x06E8, JoiningType::T),
    (0x06EA, 0x06ED, JoiningType::T),
    (0x06EE, 0x06EF, JoiningType::R),
    (0x06FA, 0x06FC, JoiningType::D),
    (0x06FF, 0x06FF, JoiningType::D),
    (0x070F, 0x070F, JoiningType::T),
    (0x0710, 0x0710, JoiningType::R),
    (0x0711, 0x0711, JoiningType::T),
    (0x0712, 0x0714, JoiningType::D),
    (0x0715, 0x0719, JoiningType::R),
    (0x071A, 0x071D, JoiningType::D),
    (0x071E, 0x071E, JoiningType::R),
    (0x071F, 0x0727, JoiningType::D),
    (0x0728, 0x0728, JoiningType::R),
    (0x0729, 0x0729, JoiningType::D),
    (0x072A, 0x072A, JoiningType::R),
    (0x072B, 0x072B, JoiningType::D),
    (0x072C, 0x072C, JoiningType::R),
    (0x072D, 0x072E, JoiningType::D),
    (0x072F, 0x072F, JoiningType::R),
    (0x0730, 0x074A, JoiningType::T),
    (0x074D, 0x074D, JoiningType::R),
    (0x074E, 0x0758, JoiningType::D),
    (0x0759, 0x075B, JoiningType::R),
    (0x075C, 0x076A, JoiningType::D),
    (0x076B, 0x076C, JoiningType::R),
    (0x076D, 0x0770, JoiningType::D),
    (0x0771, 0x0771, JoiningType::R),
    (0x0772, 0x0772, JoiningType::D),
    (0x0773, 0x0774, JoiningType::R),
    (0x0775, 0x0777, JoiningType::D),
    (0x0778, 0x0779, JoiningType::R),
    (0x077A, 0x077F, JoiningType::D),
    (0x07A6, 0x07B0, JoiningType::T),
    (0x07CA, 0x07EA, JoiningType::D),
    (0x07EB, 0x07F3, JoiningType::T),
    (0x07FA, 0x07FA, JoiningType::C),
    (0x07FD, 0x07FD, JoiningType::T),
    (0x0816, 0x0819, JoiningType::T),
    (0x081B, 0x0823, JoiningType::T),
    (0x0825, 0x0827, JoiningType::T),
    (0x0829, 0x082D, JoiningType::T),
    (0x0840, 0x0840, JoiningType::R),
    (0x0841, 0x0845, JoiningType::D),
    (0x0846, 0x0847, JoiningType::R),
    (0x0848, 0x0848, JoiningType::D),
    (0x0849, 0x0849, JoiningType::R),
    (0x084A, 0x0853, JoiningType::D),
    (0x0854, 0x0854, JoiningType::R),
    (0x0855, 0x0855, JoiningType::D),
    (0x0856, 0x0858, JoiningType::R),
    (0x0859, 0x085B, JoiningType::T),
    (0x0860, 0x0860, JoiningType::D),
    (0x0862, 0x0865, JoiningType::D),
    (0x0867, 0x0867, JoiningType::R),
    (0x0868, 0x0868, JoiningType::D),
    (0x0869, 0x086A, JoiningType::R),
    (0x0870, 0x0882, JoiningType::R),
    (0x0883, 0x0885, JoiningType::C),
    (0x0886, 0x0886, JoiningType::D),
    (0x0889, 0x088D, JoiningType::D),
    (0x088E, 0x088E, JoiningType::R),
    (0x0890, 0x0891, JoiningType::U),
    (0x0898, 0x089F, JoiningType::T),
    (0x08A0, 0x08A9, JoiningType::D),
    (0x08AA, 0x08AC, JoiningType::R),
    (0x08AE, 0x08AE, JoiningType::R),
    (0x08AF, 0x08B0, JoiningType::D),
    (0x08B1, 0x08B2, JoiningType::R),
    (0x08B3, 0x08B8, JoiningType::D),
    (0x08B9, 0x08B9, JoiningType::R),
    (0x08BA, 0x08C8, JoiningType::D),
    (0x08CA, 0x08E1, JoiningType::T),
    (0x08E2, 0x08E2, JoiningType::U),
    (0x08E3, 0x0902, JoiningType::T),
    (0x093A, 0x093A, JoiningType::T),
    (0x093C, 0x093C, JoiningType::T),
    (0x0941, 0x0948, JoiningType::T),
    (0x094D, 0x094D, JoiningType::T),
    (0x0951, 0x0957, JoiningType::T),
    (0x0962, 0x0963, JoiningType::T),
    (0x0981, 0x0981, JoiningType::T),
    (0x09BC, 0x09BC, JoiningType::T),
    (0x09C1, 0x09C4, JoiningType::T),
    (0x09CD, 0x09CD, JoiningType::T),
    (0x09E2, 0x09E3, JoiningType::T),
    (0x09FE, 0x09FE, JoiningType::T),
    (0x0A01, 0x0A02, JoiningType::T),
    (0x0A3C, 0x0A3C, JoiningType::T),
    (0x0A41, 0x0A42, JoiningType::T),
    (0x0A47, 0x0A48, JoiningType::T),
    (0x0A4B, 0x0A4D, JoiningType::T),
    (0x0A51, 0x0A51, JoiningType::T),
    (0x0A70, 0x0A71, JoiningType::T),
    (0x0A75, 0x0A75, JoiningType::T),
    (0x0A81, 0x0A82, JoiningType::T),
    (0x0ABC, 0x0ABC, JoiningType::T),
    (0x0AC1, 0x0AC5, JoiningType::T),
    (0x0AC7, 0x0AC8, JoiningType::T),
    (0x0ACD, 0x0ACD, JoiningType::T),
    (0x0AE2, 0x0AE3, JoiningType::T),
    (0x0AFA, 0x0AFF, JoiningType::T),
    (0x0B01, 0x0B01, JoiningType::T),
    (0x0B3C, 0x0B3C, JoiningType::T),
    (0x0B3F, 0x0B3F, JoiningType::T),
    (0x0B41, 0x0B44, JoiningType::T),
    (0x0B4D, 0x0B4D, JoiningType::T),
    (0x0B55, 0x0B56, JoiningType::T),
    (0x0B62, 0x0B63, JoiningType::T),
    (0x0B82, 0x0B82, JoiningType::T),
    (0x0BC0, 0x0BC0, JoiningType::T),
    (0x0BCD, 0x0BCD, JoiningType::T),
    (0x0C00, 0x0C00, JoiningType::T),
    (0x0C04, 0x0C04, JoiningType::T),
    (0x0C3C, 0x0C3C, JoiningType::T),
    (0x0C3E, 0x0C40, JoiningType::T),
    (0x0C46, 0x0C48, JoiningType::T),
    (0x0C4A, 0x0C4D, JoiningType::T),
    (0x0C55, 0x0C56, JoiningType::T),
    (0x0C62, 0x0C63, JoiningType::T),
    (0x0C81, 0x0C81, JoiningType::T),
    (0x0CBC, 0x0CBC, JoiningType::T),
    (0x0CBF, 0x0CBF, JoiningType::T),
    (0x0CC6, 0x0CC6, JoiningType::T),
    (0x0CCC, 0x0CCD, JoiningType::T),
    (0x0CE2, 0x0CE3, JoiningType::T),
    (0x0D00, 0x0D01, JoiningType::T),
    (0x0D3B, 0x0D3C, JoiningType::T),
    (0x0D41, 0x0D44, JoiningType::T),
    (0x0D4D, 0x0D4D, JoiningType::T),
    (0x0D62, 0x0D63, JoiningType::T),
    (0x0D81, 0x0D81, JoiningType::T),
    (0x0DCA, 0x0DCA, JoiningType::T),
    (0x0DD2, 0x0DD4, JoiningType::T),
    (0x0DD6, 0x0DD6, JoiningType::T),
    (0x0E31, 0x0E31, JoiningType::T),
    (0x0E34, 0x0E3A, JoiningType::T),
    (0x0E47, 0x0E4E, JoiningType::T),
    (0x0EB1, 0x0EB1, JoiningType::T),
    (0x0EB4, 0x0EBC, JoiningType::T),
    (0x0EC8, 0x0ECD, JoiningType::T),
    (0x0F18, 0x0F19, JoiningType::T),
    (0x0F35, 0x0F35, JoiningType::T),
    (0x0F37, 0x0F37, JoiningType::T),
    (0x0F39, 0x0F39, JoiningType::T),
    (0x0F71, 0x0F7E, JoiningType::T),
    (0x0F80, 0x0F84, JoiningType::T),
    (0x0F86, 0x0F87, JoiningType::T),
    (0x0F8D, 0x0F97, JoiningType::T),
    (0x0F99, 0x0FBC, JoiningType::T),
    (0x0FC6, 0x0FC6, JoiningType::T),
    (0x102D, 0x1030, JoiningType::T),
    (0x1032, 0x1037, JoiningType::T),
    (0x1039, 0x103A, JoiningType::T),
    (0x103D, 0x103E, JoiningType::T),
    (0x1058, 0x1059, JoiningType::T),
    (0x105E, 0x1060, JoiningType::T),
    (0x1071, 0x1074, JoiningType::T),
    (0x1082, 0x1082, JoiningType::T),
    (0x1085, 0x1086, JoiningType::T),
    (0x108D, 0x108D, JoiningType::T),
    (0x109D, 0x109D, JoiningType::T),
    (0x135D, 0x135F, JoiningType::T),
    (0x1712, 0x1714, JoiningType::T),
    (0x1732, 0x1733, JoiningType::T),
    (0x1752, 0x1753, JoiningType::T),
    (0x1772, 0x1773, JoiningType::T),
    (0x17B4, 0x17B5, JoiningType::T),
    (0x17B7, 0x17BD, JoiningType::T),
    (0x17C6, 0x17C6, JoiningType::T),
    (0x17C9, 0x17D3, JoiningType::T),
    (0x17DD, 0x17DD, JoiningType::T),
    (0x1807, 0x1807, JoiningType::D),
    (0x180A, 0x180A, JoiningType::C),
    (0x180B, 0x180D, JoiningType::T),
    (0x180E, 0x180E, JoiningType::U),
    (0x180F, 0x180F, JoiningType::T),
    (0x1820, 0x1878, JoiningType::D),
    (0x1885, 0x1886, JoiningType::T),
    (0x1887, 0x18A8, JoiningType::D),
    (0x18A9, 0x18A9, JoiningType::T),
    (0x18AA, 0x18AA, JoiningType::D),
    (0x1920, 0x1922, JoiningType::T),
    (0x1927, 0x1928, JoiningType::T),
    (0x1932, 0x1932, JoiningType::T),
    (0x1939, 0x193B, JoiningType::T),
    (0x1A17, 0x1A18, JoiningType::T),
    (0x1A1B, 0x1A1B, JoiningType::T),
    (0x1A56, 0x1A56, JoiningType::T),
    (0x1A58, 0x1A5E, JoiningType::T),
    (0x1A60, 0x1A60, JoiningType::T),
    (0x1A62, 0x1A62, JoiningType::T),
    (0x1A65, 0x1A6C, JoiningType::T),
    (0x1A73, 0x1A7C, JoiningType::T),
    (0x1A7F, 0x1A7F, JoiningType::T),
    (0x1AB0, 0x1ACE, JoiningType::T),
    (0x1B00, 0x1B03, JoiningType::T),
    (0x1B34, 0x1B34, JoiningType::T),
    (0x1B36, 0x1B3A, JoiningType::T),
    (0x1B3C, 0x1B3C, JoiningType::T),
    (0x1B42, 0x1B42, JoiningType::T),
    (0x1B6B, 0x1B73, JoiningType::T),
    (0x1B80, 0x1B81, JoiningType::T),
    (0x1BA2, 0x1BA5, JoiningType::T),
    (0x1BA8, 0x1BA9, JoiningType::T),
    (0x1BAB, 0x1BAD, JoiningType::T),
    (0x1BE6, 0x1BE6, JoiningType::T),
    (0x1BE8, 0x1BE9, JoiningType::T),
    (0x1BED, 0x1BED, JoiningType::T),
    (0x1BEF, 0x1BF1, JoiningType::T),
    (0x1C2C, 0x1C33, JoiningType::T),
    (0x1C36, 0x1C37, JoiningType::T),
    (0x1CD0, 0x1CD2, JoiningType::T),
    (0x1CD4, 0x1CE0, JoiningType::T),
    (0x1CE2, 0x1CE8, JoiningType::T),
    (0x1CED, 0x1CED, JoiningType::T),
    (0x1CF4, 0x1CF4, JoiningType::T),
    (0x1CF8, 0x1CF9, JoiningType::T),
    (0x1DC0, 0x1DFF, JoiningType::T),
    (0x200B, 0x200B, JoiningType::T),
    (0x200C, 0x200C, JoiningType::U),
    (0x200D, 0x200D, JoiningType::C),
    (0x200E, 0x200F, JoiningType::T),
    (0x202A, 0x202E, JoiningType::T),
    (0x2060, 0x2064, JoiningType::T),
    (0x2066, 0x2069, JoiningType::U),
    (0x206A, 0x206F, JoiningType::T),
    (0x20D0, 0x20F0, JoiningType::T),
    (0x2CEF, 0x2CF1, JoiningType::T),
    (0x2D7F, 0x2D7F, JoiningType::T),
    (0x2DE0, 0x2DFF, JoiningType::T),
    (0x302A, 0x302D, JoiningType::T),
    (0x3099, 0x309A, JoiningType::T),
    (0xA66F, 0xA672, JoiningType::T),
    (0xA674, 0xA67D, JoiningType::T),
    (0xA69E, 0xA69F, JoiningType::T),
    (0xA6F0, 0xA6F1, JoiningType::T),
    (0xA802, 0xA802, JoiningType::T),
    (0xA806, 0xA806, JoiningType::T),
    (0xA80B, 0xA80B, JoiningType::T),
    (0xA825, 0xA826, JoiningType::T),
    (0xA82C, 0xA82C, JoiningType::T),
    (0xA840, 0xA871, JoiningType::D),
    (0xA872, 0xA872, JoiningType::L),
    (0xA8C4, 0xA8C5, JoiningType::T),
    (0xA8E0, 0xA8F1, JoiningType::T),
    (0xA8FF, 0xA8FF, JoiningType::T),
    (0xA926, 0xA92D, JoiningType::T),
    (0xA947, 0xA951, JoiningType::T),
    (0xA980, 0xA982, JoiningType::T),
    (0xA9B3, 0xA9B3, JoiningType::T),
    (0xA9B6, 0xA9B9, JoiningType::T),
    (0xA9BC, 0xA9BD, JoiningType::T),
    (0xA9E5, 0xA9E5, JoiningType::T),
    (0xAA29, 0xAA2E, JoiningType::T),
    (0xAA31, 0xAA32, JoiningType::T),
    (0xAA35, 0xAA36, JoiningType::T),
    (0xAA43, 0xAA43, JoiningType::T),
    (0xAA4C, 0xAA4C, JoiningType::T),
    (0xAA7C, 0xAA7C, JoiningType::T),
    (0xAAB0, 0xAAB0, JoiningType::T),
    (0xAAB2, 0xAAB4, JoiningType::T),
    (0xAAB7, 0xAAB8, JoiningType::T),
    (0xAABE, 0xAABF, JoiningType::T),
    (0xAAC1, 0xAAC1, JoiningType::T),
    (0xAAEC, 0xAAED, JoiningType::T),
    (0xAAF6, 0xAAF6, JoiningType::T),
    (0xABE5, 0xABE5, JoiningType::T),
    (0xABE8, 0xABE8, JoiningType::T),
    (0xABED, 0xABED, JoiningType::T),
    (0xFB1E, 0xFB1E, JoiningType::T),
    (0xFE00, 0xFE0F, JoiningType::T),
    (0xFE20, 0xFE2F, JoiningType::T),
    (0xFEFF, 0xFEFF, JoiningType::T),
    (0xFFF9, 0xFFFB, JoiningType::T),
    (0x101FD, 0x101FD, JoiningType::T),
    (0x102E0, 0x102E0, JoiningType::T),
    (0x10376, 0x1037A, JoiningType::T),
    (0x10A01, 0x10A03, JoiningType::T),
    (0x10A05, 0x10A06, JoiningType::T),
    (0x10A0C, 0x10A0F, JoiningType::T),
    (0x10A38, 0x10A3A, JoiningType::T),
    (0x10A3F, 0x10A3F, JoiningType::T),
    (0x10AC0, 0x10AC4, JoiningType::D),
    (0x10AC5, 0x10AC5, JoiningType::R),
    (0x10AC7, 0x10AC7, JoiningType::R),
    (0x10AC9, 0x10ACA, JoiningType::R),
    (0x10ACD, 0x10ACD, JoiningType::L),
    (0x10ACE, 0x10AD2, JoiningType::R),
    (0x10AD3, 0x10AD6, JoiningType::D),
    (0x10AD7, 0x10AD7, JoiningType::L),
    (0x10AD8, 0x10ADC, JoiningType::D),
    (0x10ADD, 0x10ADD, JoiningType::R),
    (0x10ADE, 0x10AE0, JoiningType::D),
    (0x10AE1, 0x10AE1, JoiningType::R),
    (0x10AE4, 0x10AE4, JoiningType::R),
    (0x10AE5, 0x10AE6, JoiningType::T),
    (0x10AEB, 0x10AEE, JoiningType::D),
    (0x10AEF, 0x10AEF, JoiningType::R),
    (0x10B80, 0x10B80, JoiningType::D),
    (0x10B81, 0x10B81, JoiningType::R),
    (0x10B82, 0x10B82, JoiningType::D),
    (0x10B83, 0x10B85, JoiningType::R),
    (0x10B86, 0x10B88, JoiningType::D),
    (0x10B89, 0x10B89, JoiningType::R),
    (0x10B8A, 0x10B8B, JoiningType::D),
    (0x10B8C, 0x10B8C, JoiningType::R),
    (0x10B8D, 0x10B8D, JoiningType::D),
    (0x10B8E, 0x10B8F, JoiningType::R),
    (0x10B90, 0x10B90, JoiningType::D),
    (0x10B91, 0x10B91, JoiningType::R),
    (0x10BA9, 0x10BAC, JoiningType::R),
    (0x10BAD, 0x10BAE, JoiningType::D),
    (0x10D00, 0x10D00, JoiningType::L),
    (0x10D01, 0x10D21, JoiningType::D),
    (0x10D22, 0x10D22, JoiningType::R),
    (0x10D23, 0x10D23, JoiningType::D),
    (0x10D24, 0x10D27, JoiningType::T),
    (0x10EAB, 0x10EAC, JoiningType::T),
    (0x10F30, 0x10F32, JoiningType::D),
    (0x10F33, 0x10F33, JoiningType::R),
    (0x10F34, 0x10F44, JoiningType::D),
    (0x10F46, 0x10F50, JoiningType::T),
    (0x10F51, 0x10F53, JoiningType::D),
    (0x10F54, 0x10F54, JoiningType::R),
    (0x10F70, 0x10F73, JoiningType::D),
    (0x10F74, 0x10F75, JoiningType::R),
    (0x10F76, 0x10F81, JoiningType::D),
    (0x10F82, 0x10F85, JoiningType::T),
    (0x10FB0, 0x10FB0, JoiningType::D),
    (0x10FB2, 0x10FB3, JoiningType::D),
    (0x10FB4, 0x10FB6, JoiningType::R),
    (0x10FB8, 0x10FB8, JoiningType::D),
    (0x10FB9, 0x10FBA, JoiningType::R),
    (0x10FBB, 0x10FBC, JoiningType::D),
    (0x10FBD, 0x10FBD, JoiningType::R),
    (0x10FBE, 0x10FBF, JoiningType::D),
    (0x10FC1, 0x10FC1, JoiningType::D),
    (0x10FC2, 0x10FC3, JoiningType::R),
    (0x10FC4, 0x10FC4, JoiningType::D),
    (0x10FC9, 0x10FC9, JoiningType::R),
    (0x10FCA, 0x10FCA, JoiningType::D),
    (0x10FCB, 0x10FCB, JoiningType::L),
    (0x11001, 0x11001, JoiningType::T),
    (0x11038, 0x11046, JoiningType::T),
    (0x11070, 0x11070, JoiningType::T),
    (0x11073, 0x11074, JoiningType::T),
    (0x1107F, 0x11081, JoiningType::T),
    (0x110B3, 0x110B6, JoiningType::T),
    (0x110B9, 0x110BA, JoiningType::T),
    (0x110BD, 0x110BD, JoiningType::U),
    (0x110C2, 0x110C2, JoiningType::T),
    (0x110CD, 0x110CD, JoiningType::U),
    (0x11100, 0x11102, JoiningType::T),
    (0x11127, 0x1112B, JoiningType::T),
    (0x1112D, 0x11134, JoiningType::T),
    (0x11173, 0x11173, JoiningType::T),
    (0x11180, 0x11181, JoiningType::T),
    (0x111B6, 0x111BE, JoiningType::T),
    (0x111C9, 0x111CC, JoiningType::T),
    (0x111CF, 0x111CF, JoiningType::T),
    (0x1122F, 0x11231, JoiningType::T),
    (0x11234, 0x11234, JoiningType::T),
    (0x11236, 0x11237, JoiningType::T),
    (0x1123E, 0x1123E, JoiningType::T),
    (0x112DF, 0x112DF, JoiningType::T),
    (0x112E3, 0x112EA, JoiningType::T),
    (0x11300, 0x11301, JoiningType::T),
    (0x1133B, 0x1133C, JoiningType::T),
    (0x11340, 0x11340, JoiningType::T),
    (0x11366, 0x1136C, JoiningType::T),
    (0x11370, 0x11374, JoiningType::T),
    (0x11438, 0x1143F, JoiningType::T),
    (0x11442, 0x11444, JoiningType::T),
    (0x11446, 0x11446, JoiningType::T),
    (0x1145E, 0x1145E, JoiningType::T),
    (0x114B3, 0x114B8, JoiningType::T),
    (0x114BA, 0x114BA, JoiningType::T),
    (0x114BF, 0x114C0, JoiningType::T),
    (0x114C2, 0x114C3, JoiningType::T),
    (0x115B2, 0x115B5, JoiningType::T),
    (0x115BC, 0x115BD, JoiningType::T),
    (0x115BF, 0x115C0, JoiningType::T),
    (0x115DC, 0x115DD, JoiningType::T),
    (0x11633, 0x1163A, JoiningType::T),
    (0x1163D, 0x1163D, JoiningType::T),
    (0x1163F, 0x11640, JoiningType::T),
    (0x116AB, 0x116AB, JoiningType::T),
    (0x116AD, 0x116AD, JoiningType::T),
    (0x116B0, 0x116B5, JoiningType::T),
    (0x116B7, 0x116B7, JoiningType::T),
    (0x1171D, 0x1171F, JoiningType::T),
    (0x11722, 0x11725, JoiningType::T),
    (0x11727, 0x1172B, JoiningType::T),
    (0x1182F, 0x11837, JoiningType::T),
    (0x11839, 0x1183A, JoiningType::T),
    (0x1193B, 0x1193C, JoiningType::T),
    (0x1193E, 0x1193E, JoiningType::T),
    (0x11943, 0x11943, JoiningType::T),
    (0x119D4, 0x119D7, JoiningType::T),
    (0x119DA, 0x119DB, JoiningType::T),
    (0x119E0, 0x119E0, JoiningType::T),
    (0x11A01, 0x11A0A, JoiningType::T),
    (0x11A33, 0x11A38, JoiningType::T),
    (0x11A3B, 0x11A3E, JoiningType::T),
    (0x11A47, 0x11A47, JoiningType::T),
    (0x11A51, 0x11A56, JoiningType::T),
    (0x11A59, 0x11A5B, JoiningType::T),
    (0x11A8A, 0x11A96, JoiningType::T),
    (0x11A98, 0x11A99, JoiningType::T),
    (0x11C30, 0x11C36, JoiningType::T),
    (0x11C38, 0x11C3D, JoiningType::T),
    (0x11C3F, 0x11C3F, JoiningType::T),
    (0x11C92, 0x11CA7, JoiningType::T),
    (0x11CAA, 0x11CB0, JoiningType::T),
    (0x11CB2, 0x11CB3, JoiningType::T),
    (0x11CB5, 0x11CB6, JoiningType::T),
    (0x11D31, 0x11D36, JoiningType::T),
    (0x11D3A, 0x11D3A, JoiningType::T),
    (0x11D3C, 0x11D3D, JoiningType::T),
    (0x11D3F, 0x11D45, JoiningType::T),
    (0x11D47, 0x11D47, JoiningType::T),
    (0x11D90, 0x11D91, JoiningType::T),
    (0x11D95, 0x11D95, JoiningType::T),
    (0x11D97, 0x11D97, JoiningType::T),
    (0x11EF3, 0x11EF4, JoiningType::T),
    (0x13430, 0x13438, JoiningType::T),
    (0x16AF0, 0x16AF4, JoiningType::T),
    (0x16B30, 0x16B36, JoiningType::T),
    (0x16F4F, 0x16F4F, JoiningType::T),
    (0x16F8F, 0x16F92, JoiningType::T),
    (0x16FE4, 0x16FE4, JoiningType::T),
    (0x1BC9D, 0x1BC9E, JoiningType::T),
    (0x1BCA0, 0x1BCA3, JoiningType::T),
    (0x1CF00, 0x1CF2D, JoiningType::T),
    (0x1CF30, 0x1CF46, JoiningType::T),
    (0x1D167, 0x1D169, JoiningType::T),
    (0x1D173, 0x1D182, JoiningType::T),
    (0x1D185, 0x1D18B, JoiningType::T),
    (0x1D1AA, 0x1D1AD, JoiningType::T),
    (0x1D242, 0x1D244, JoiningType::T),
    (0x1DA00, 0x1DA36, JoiningType::T),
    (0x1DA3B, 0x1DA6C, JoiningType::T),
    (0x1DA75, 0x1DA75, JoiningType::T),
    (0x1DA84, 0x1DA84, JoiningType::T),
    (0x1DA9B, 0x1DA9F, JoiningType::T),
    (0x1DAA1, 0x1DAAF, JoiningType::T),
    (0x1E000, 0x1E006, JoiningType::T),
    (0x1E008, 0x1E018, JoiningType::T),
    (0x1E01B, 0x1E021, JoiningType::T),
    (0x1E023, 0x1E024, JoiningType::T),
    (0x1E026, 0x1E02A, JoiningType::T),
    (0x1E130, 0x1E136, JoiningType::T),
    (0x1E2AE, 0x1E2AE, JoiningType::T),
    (0x1E2EC, 0x1E2EF, JoiningType::T),
    (0x1E8D0, 0x1E8D6, JoiningType::T),
    (0x1E900, 0x1E943, JoiningType::D),
    (0x1E944, 0x1E94B, JoiningType::T),
    (0xE0001, 0xE0001, JoiningType::T),
    (0xE0020, 0xE007F, JoiningType::T),
    (0xE0100, 0xE01EF, JoiningType::T),
];
