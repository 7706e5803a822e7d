//! Known-good multipliers for every square, in square order (a1 = 0).
//!
//! Supplying these skips the random search entirely. Each one is still verified against
//! every occupancy of its square when the tables are built.

/// Precomputed magic multipliers for rook attacks.
pub const ROOK_MULTIPLIERS: [u64; 64] = [
    0xA300108000210240, 0x4040100120084000, 0x2300184011002000, 0x0080080044801000,
    0x0100040208001100, 0x0300040002410048, 0x0080020005000280, 0x120000A201028044,
    0x400C800040128023, 0x40004001E0100842, 0x1001801000200484, 0x4000801002080080,
    0x0480800800820400, 0xA0270008A3000400, 0x0802000802000421, 0x6001000082014100,
    0x2300808000400020, 0x0432020025008348, 0x0004808010002001, 0x8440818010000800,
    0x0A06220022021028, 0x7002808042000400, 0x20840C0001104208, 0xA1230200004C0081,
    0x8400219080024000, 0x8001200240085000, 0x0201025100402000, 0x0008F00100210009,
    0x0040850100080010, 0x048A001200150810, 0x4300918400081210, 0x1000110200008044,
    0x0000804005800020, 0x1402010082002240, 0x4008200880801001, 0x1000210009001000,
    0x0600040080800800, 0x0001000229000400, 0x0004410804001002, 0x008000884200012C,
    0x8240008021428000, 0x484000281000A002, 0x0810002000808011, 0x01030010030B0020,
    0x0200480004008080, 0x0041008400090002, 0x2800060001008080, 0x0010104403920009,
    0x0801800041023100, 0x0C01002080400100, 0x400010822A004200, 0x0302080210008080,
    0x0850080080040080, 0x0000040080020080, 0x0198021809500400, 0x1C0408840100C200,
    0x0008408000102101, 0x0000220190804102, 0x0118428860001101, 0x8110100120042901,
    0x008A000420D04802, 0x2801000A04004801, 0x0281001084220001, 0x103400C404810062,
];

/// Precomputed magic multipliers for bishop attacks.
pub const BISHOP_MULTIPLIERS: [u64; 64] = [
    0x8050200800418028, 0x0090220A40420000, 0x043000C481040000, 0x03520A0200430008,
    0x0C1410A840000800, 0x8001140E40001000, 0x00820B102804B000, 0x2002010403050805,
    0x000021040C280840, 0x4100A00401020025, 0x2800240402820000, 0x001908084102D082,
    0x0408040308404008, 0x4956008820080101, 0xE1000082080A4010, 0x8014044404049A01,
    0x2440405006084500, 0xE02000032C010210, 0x0004002088048008, 0x0044040804204800,
    0x0109001820080300, 0x0198404080504004, 0x0009480202062004, 0x8002420100423030,
    0x01501060450C9001, 0x00080800601A208A, 0x6100300808008060, 0x4540040041820880,
    0xA400840040802000, 0x0010C200A0411006, 0x0008010408540200, 0x10840024A5010150,
    0x0108200440C80800, 0x4201301080460C05, 0x0040129010980040, 0x1840200800010106,
    0x0000420020020081, 0x1042A80080011000, 0x802C040414015110, 0x9001010100052400,
    0x0202080440041409, 0x080400CE10000800, 0x2010402404004040, 0x4080804208004084,
    0x00010208A2046C00, 0x000310010A000140, 0x0030010204000080, 0x0008010042020285,
    0x0014018404200802, 0x003A04C202104090, 0x0004022384108408, 0x904214AA84042000,
    0x80000A100A022400, 0x2000041002420040, 0x0820204183010000, 0x4204010204330200,
    0x0002004046082041, 0x8008202412084400, 0x02B0891200422204, 0x000A004390840C00,
    0x4001400044904C00, 0x8004001021014D00, 0x0008088848080160, 0x00101000A1104604,
];
