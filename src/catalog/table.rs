// Ionic charges seen in common compounds, most usual first. Indexed by
// atomic number - 1.
pub(super) static COMMON_CHARGES: [&[i8]; 118] = [
    &[1, -1], // H
    &[], // He
    &[1], // Li
    &[2], // Be
    &[3], // B
    &[4, -4, 2], // C
    &[-3, 3, 5], // N
    &[-2], // O
    &[-1], // F
    &[], // Ne
    &[1], // Na
    &[2], // Mg
    &[3], // Al
    &[4, -4], // Si
    &[-3, 3, 5], // P
    &[-2, 2, 4, 6], // S
    &[-1, 1, 3, 5], // Cl
    &[], // Ar
    &[1], // K
    &[2], // Ca
    &[3], // Sc
    &[4, 3, 2], // Ti
    &[5, 4, 3, 2], // V
    &[3, 6, 2], // Cr
    &[2, 4, 7], // Mn
    &[2, 3], // Fe
    &[2, 3], // Co
    &[2, 3], // Ni
    &[2, 1], // Cu
    &[2], // Zn
    &[3], // Ga
    &[4, 2], // Ge
    &[-3, 3, 5], // As
    &[-2, 4, 6], // Se
    &[-1, 1, 5], // Br
    &[], // Kr
    &[1], // Rb
    &[2], // Sr
    &[3], // Y
    &[4], // Zr
    &[5, 3], // Nb
    &[6, 4], // Mo
    &[7, 4], // Tc
    &[3, 4], // Ru
    &[3], // Rh
    &[2, 4], // Pd
    &[1], // Ag
    &[2], // Cd
    &[3], // In
    &[4, 2], // Sn
    &[-3, 3, 5], // Sb
    &[-2, 4, 6], // Te
    &[-1, 1, 5, 7], // I
    &[], // Xe
    &[1], // Cs
    &[2], // Ba
    &[3], // La
    &[3, 4], // Ce
    &[3], // Pr
    &[3], // Nd
    &[3], // Pm
    &[3, 2], // Sm
    &[3, 2], // Eu
    &[3], // Gd
    &[3], // Tb
    &[3], // Dy
    &[3], // Ho
    &[3], // Er
    &[3, 2], // Tm
    &[3, 2], // Yb
    &[3], // Lu
    &[4], // Hf
    &[5], // Ta
    &[6, 4], // W
    &[7, 4], // Re
    &[4, 3], // Os
    &[4, 3], // Ir
    &[2, 4], // Pt
    &[3, 1], // Au
    &[2, 1], // Hg
    &[1, 3], // Tl
    &[2, 4], // Pb
    &[3, 5], // Bi
    &[4, 2], // Po
    &[-1, 1], // At
    &[], // Rn
    &[1], // Fr
    &[2], // Ra
    &[3], // Ac
    &[4], // Th
    &[5, 4], // Pa
    &[6, 4, 3], // U
    &[5, 4, 3], // Np
    &[4, 3, 5, 6], // Pu
    &[3, 4, 5, 6], // Am
    &[3], // Cm
    &[3, 4], // Bk
    &[3], // Cf
    &[3], // Es
    &[3], // Fm
    &[3, 2], // Md
    &[2, 3], // No
    &[3], // Lr
    &[4], // Rf
    &[5], // Db
    &[6], // Sg
    &[7], // Bh
    &[8], // Hs
    &[], // Mt
    &[], // Ds
    &[], // Rg
    &[2], // Cn
    &[], // Nh
    &[], // Fl
    &[], // Mc
    &[], // Lv
    &[], // Ts
    &[], // Og
];
